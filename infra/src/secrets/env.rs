use std::env;

use async_trait::async_trait;

use super::SecretsProvider;
use crate::InfrastructureError;

/// Reads secrets from environment variables.
///
/// `Jwt--SigningKey` is read from `JWT__SIGNINGKEY`, optionally prefixed
/// (`SECRETS_JWT__SIGNINGKEY` with prefix `SECRETS`).
#[derive(Debug, Clone, Default)]
pub struct EnvSecretsProvider {
    prefix: Option<String>,
}

impl EnvSecretsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }

    /// Environment variable that holds the named secret
    pub fn variable_name(&self, secret_name: &str) -> String {
        let base = secret_name.replace("--", "__").to_uppercase();
        match &self.prefix {
            Some(prefix) => format!("{}_{}", prefix.to_uppercase(), base),
            None => base,
        }
    }
}

#[async_trait]
impl SecretsProvider for EnvSecretsProvider {
    async fn get_secret(&self, name: &str) -> Result<Option<String>, InfrastructureError> {
        let variable = self.variable_name(name);
        match env::var(&variable) {
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(env::VarError::NotUnicode(_)) => Err(InfrastructureError::SecretStore(format!(
                "{} is not valid unicode",
                variable
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_name() {
        let provider = EnvSecretsProvider::new();
        assert_eq!(provider.variable_name("Jwt--SigningKey"), "JWT__SIGNINGKEY");

        let prefixed = EnvSecretsProvider::with_prefix("secrets");
        assert_eq!(prefixed.variable_name("Jwt--Issuer"), "SECRETS_JWT__ISSUER");
    }

    #[tokio::test]
    async fn test_fetch_translates_names() {
        let provider = EnvSecretsProvider::with_prefix("SR_INFRA_ENV_TEST");
        env::set_var("SR_INFRA_ENV_TEST_JWT__SIGNINGKEY", "from-env");

        let secrets = provider.fetch(&["Jwt--SigningKey".to_string()]).await.unwrap();

        assert_eq!(secrets.get("Jwt:SigningKey").map(String::as_str), Some("from-env"));
    }

    #[tokio::test]
    async fn test_missing_variable_is_secret_not_found() {
        let provider = EnvSecretsProvider::with_prefix("SR_INFRA_ENV_TEST_ABSENT");

        let result = provider.fetch(&["Jwt--Audience".to_string()]).await;

        assert!(matches!(
            result,
            Err(InfrastructureError::SecretNotFound { name }) if name == "Jwt--Audience"
        ));
    }
}
