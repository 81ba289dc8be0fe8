//! Typed client for the student records API

use std::sync::Arc;

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use sr_shared::dto::{CreateStudentDto, LoginRequest, LoginResponse, StudentDto, UpdateStudentDto};
use sr_shared::{ApiErrorType, ApiResponse};
use tokio::sync::Mutex;

use crate::config::ClientConfig;
use crate::credentials::CredentialManager;
use crate::error::ClientError;

/// Message of the envelope returned when no credential could be obtained
pub const AUTHENTICATION_FAILED_MESSAGE: &str = "API authentication failed.";

const LOGIN_PATH: &str = "auth/login";
const STUDENTS_PATH: &str = "students";

pub struct StudentsApiClient {
    http: Client,
    config: ClientConfig,
    credentials: Arc<CredentialManager>,
    // One login in flight at a time
    login_lock: Mutex<()>,
}

impl StudentsApiClient {
    pub fn new(config: ClientConfig, credentials: Arc<CredentialManager>) -> Self {
        Self::with_http_client(Client::new(), config, credentials)
    }

    pub fn with_http_client(
        http: Client,
        config: ClientConfig,
        credentials: Arc<CredentialManager>,
    ) -> Self {
        Self {
            http,
            config,
            credentials,
            login_lock: Mutex::new(()),
        }
    }

    pub fn credentials(&self) -> &Arc<CredentialManager> {
        &self.credentials
    }

    /// Exchanges the configured application id for a token and stores it on
    /// success. The server's envelope is returned as-is.
    pub async fn login(&self) -> Result<ApiResponse<LoginResponse>, ClientError> {
        let request = self
            .http
            .post(self.config.endpoint(LOGIN_PATH))
            .json(&LoginRequest::new(self.config.application_id.clone()));

        let response: ApiResponse<LoginResponse> = read_envelope(request).await?;

        match (&response.success, &response.value) {
            (true, Some(login)) => {
                self.credentials.set_token(&login.token).await?;
                tracing::info!("Obtained application credential");
            }
            _ => {
                tracing::warn!(
                    error_type = ?response.first_error_type(),
                    "Login rejected by the API"
                );
            }
        }

        Ok(response)
    }

    /// Whether a usable credential is held, logging in first if needed
    pub async fn ensure_authenticated(&self) -> bool {
        self.bearer_token().await.is_some()
    }

    pub async fn list_students(&self) -> Result<ApiResponse<Vec<StudentDto>>, ClientError> {
        self.send_authorized(Method::GET, STUDENTS_PATH, None::<&()>)
            .await
    }

    pub async fn get_student(&self, id: i64) -> Result<ApiResponse<StudentDto>, ClientError> {
        self.send_authorized(Method::GET, &student_path(id), None::<&()>)
            .await
    }

    pub async fn create_student(
        &self,
        student: &CreateStudentDto,
    ) -> Result<ApiResponse<StudentDto>, ClientError> {
        self.send_authorized(Method::POST, STUDENTS_PATH, Some(student))
            .await
    }

    pub async fn update_student(
        &self,
        id: i64,
        student: &UpdateStudentDto,
    ) -> Result<ApiResponse<StudentDto>, ClientError> {
        self.send_authorized(Method::PUT, &student_path(id), Some(student))
            .await
    }

    pub async fn delete_student(&self, id: i64) -> Result<ApiResponse<()>, ClientError> {
        self.send_authorized(Method::DELETE, &student_path(id), None::<&()>)
            .await
    }

    async fn send_authorized<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiResponse<T>, ClientError>
    where
        B: serde::Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let Some(token) = self.bearer_token().await else {
            return Ok(ApiResponse::error(
                ApiErrorType::AuthorizationError,
                AUTHENTICATION_FAILED_MESSAGE,
            ));
        };

        let mut request = self
            .http
            .request(method, self.config.endpoint(path))
            .bearer_auth(token);
        if let Some(body) = body {
            request = request.json(body);
        }

        read_envelope(request).await
    }

    /// A valid token, obtained through login when none is held
    async fn bearer_token(&self) -> Option<String> {
        if let Some(token) = self.held_token().await {
            return Some(token);
        }

        let _login = self.login_lock.lock().await;

        // Another caller may have logged in while we waited
        if let Some(token) = self.held_token().await {
            return Some(token);
        }

        let timeout = self.config.login_timeout;
        let outcome = match tokio::time::timeout(timeout, self.login()).await {
            Ok(result) => result,
            Err(_) => Err(ClientError::LoginTimeout(timeout)),
        };

        match outcome {
            Ok(response) if response.is_success() => response.into_value().map(|login| login.token),
            Ok(_) => None,
            Err(err) => {
                tracing::warn!(error = %err, "Login failed");
                None
            }
        }
    }

    async fn held_token(&self) -> Option<String> {
        match self.credentials.get_token().await {
            Ok(token) => token,
            Err(err) => {
                tracing::warn!(error = %err, "Could not read the stored credential");
                None
            }
        }
    }
}

fn student_path(id: i64) -> String {
    format!("{}/{}", STUDENTS_PATH, id)
}

/// Reads the standard envelope regardless of the HTTP status
async fn read_envelope<T: DeserializeOwned>(
    request: RequestBuilder,
) -> Result<ApiResponse<T>, ClientError> {
    let response = request.send().await?;
    let status = response.status();
    let url = response.url().clone();
    let bytes = response.bytes().await?;

    serde_json::from_slice(&bytes).map_err(|e| {
        ClientError::InvalidResponse(format!("{} from {}: {}", status, url, e))
    })
}
