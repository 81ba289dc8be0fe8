use std::collections::HashMap;

use async_trait::async_trait;

use super::SecretsProvider;
use crate::InfrastructureError;

/// Fixed in-memory secrets, keyed by store identifier
#[derive(Debug, Clone, Default)]
pub struct StaticSecretsProvider {
    secrets: HashMap<String, String>,
}

impl StaticSecretsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_secret(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.secrets.insert(name.into(), value.into());
        self
    }
}

#[async_trait]
impl SecretsProvider for StaticSecretsProvider {
    async fn get_secret(&self, name: &str) -> Result<Option<String>, InfrastructureError> {
        Ok(self.secrets.get(name).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_returns_config_keys() {
        let provider = StaticSecretsProvider::new()
            .with_secret("Jwt--Issuer", "students-api")
            .with_secret("Jwt--Audience", "students-client")
            .with_secret("Jwt--SigningKey", "key");

        let names = vec![
            "Jwt--Issuer".to_string(),
            "Jwt--Audience".to_string(),
            "Jwt--SigningKey".to_string(),
        ];
        let secrets = provider.fetch(&names).await.unwrap();

        assert_eq!(secrets.len(), 3);
        assert_eq!(secrets["Jwt:Issuer"], "students-api");
        assert_eq!(secrets["Jwt:Audience"], "students-client");
        assert_eq!(secrets["Jwt:SigningKey"], "key");
    }

    #[tokio::test]
    async fn test_fetch_fails_on_first_missing_secret() {
        let provider = StaticSecretsProvider::new().with_secret("Jwt--Issuer", "students-api");

        let result = provider
            .fetch(&["Jwt--Issuer".to_string(), "Jwt--SigningKey".to_string()])
            .await;

        assert!(matches!(result, Err(InfrastructureError::SecretNotFound { .. })));
    }

    #[tokio::test]
    async fn test_fetch_nothing() {
        let provider = StaticSecretsProvider::new();
        assert!(provider.fetch(&[]).await.unwrap().is_empty());
    }
}
