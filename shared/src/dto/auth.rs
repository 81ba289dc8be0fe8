use serde::{Deserialize, Serialize};

/// Body of `POST /auth/login`.
///
/// `application_id` is optional so that a missing field reaches the login
/// check and is reported as invalid input instead of a parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub application_id: Option<String>,
}

impl LoginRequest {
    pub fn new(application_id: impl Into<String>) -> Self {
        Self {
            application_id: Some(application_id.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub application_id: String,
    pub token: String,
}
