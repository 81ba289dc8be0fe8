//! Shared fixtures for the HTTP integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::json;
use sr_api::AppState;
use sr_core::{AuthorizationService, InMemoryStudentRepository, TokenService, TokenServiceConfig};

pub const ISSUER: &str = "https://students-api.test";
pub const AUDIENCE: &str = "https://students-web.test";
pub const SIGNING_KEY: &str = "integration-test-signing-key-with-enough-length-for-hs512";

pub struct TestContext {
    pub state: web::Data<AppState<InMemoryStudentRepository>>,
    pub repository: Arc<InMemoryStudentRepository>,
    pub tokens: Arc<TokenService>,
}

impl TestContext {
    pub fn new() -> Self {
        let tokens = Arc::new(token_service(SIGNING_KEY));
        let repository = Arc::new(InMemoryStudentRepository::new());
        let state = web::Data::new(AppState::new(
            Arc::clone(&tokens),
            AuthorizationService::default(),
            Arc::clone(&repository),
        ));

        Self {
            state,
            repository,
            tokens,
        }
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.tokens.issue().unwrap())
    }
}

pub fn token_service(signing_key: &str) -> TokenService {
    TokenService::new(TokenServiceConfig::new(ISSUER, AUDIENCE, signing_key).unwrap())
}

/// Mints an otherwise valid token carrying a different application id
pub fn token_with_application_id(application_id: &str) -> String {
    let now = Utc::now();
    let claims = json!({
        "iss": ISSUER,
        "aud": AUDIENCE,
        "iat": now.timestamp(),
        "exp": (now + Duration::days(1)).timestamp(),
        "ApplicationId": application_id,
    });

    encode(
        &Header::new(jsonwebtoken::Algorithm::HS512),
        &claims,
        &EncodingKey::from_secret(SIGNING_KEY.as_bytes()),
    )
    .unwrap()
}
