use std::sync::Arc;

use sr_shared::dto::LoginResponse;
use sr_shared::FRONT_END_APPLICATION_ID;

use crate::errors::{AuthError, DomainError};
use crate::services::token::TokenService;

/// Issues tokens to the single recognized client application
pub struct AuthenticationService {
    token_service: Arc<TokenService>,
}

impl AuthenticationService {
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }

    /// Validates the presented application identifier and issues a token
    pub fn login(&self, application_id: Option<&str>) -> Result<LoginResponse, DomainError> {
        let application_id = match application_id {
            Some(id) if !id.is_empty() => id,
            _ => {
                tracing::info!("Login rejected: application id missing");
                return Err(AuthError::ApplicationIdMissing.into());
            }
        };

        if application_id != FRONT_END_APPLICATION_ID {
            tracing::warn!("Login rejected: unrecognized application id");
            return Err(AuthError::ApplicationIdInvalid.into());
        }

        let token = self.token_service.issue()?;
        tracing::info!(application_id, "Issued application token");

        Ok(LoginResponse {
            application_id: application_id.to_string(),
            token,
        })
    }
}
