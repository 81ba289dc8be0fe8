//! Client configuration

use std::time::Duration;

use sr_shared::FRONT_END_APPLICATION_ID;

/// Default upper bound for a login round trip
pub const DEFAULT_LOGIN_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root, e.g. `https://students.example.com`
    pub base_url: String,

    /// Identifier presented at login
    pub application_id: String,

    /// A login that takes longer counts as an authentication failure
    pub login_timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            application_id: FRONT_END_APPLICATION_ID.to_string(),
            login_timeout: DEFAULT_LOGIN_TIMEOUT,
        }
    }

    pub fn with_application_id(mut self, application_id: impl Into<String>) -> Self {
        self.application_id = application_id.into();
        self
    }

    pub fn with_login_timeout(mut self, timeout: Duration) -> Self {
        self.login_timeout = timeout;
        self
    }

    /// Absolute URL for an API path such as `/students/1`
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
