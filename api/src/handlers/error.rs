//! Translation of domain failures into the `{success, value, errors}` envelope

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sr_core::{AuthError, DomainError, TokenError};
use sr_shared::{ApiErrorType, ApiResponse};
use std::fmt;

/// Message returned for every authorization failure. The specific reason is
/// only logged.
pub const AUTHORIZATION_FAILED_MESSAGE: &str = "Authorization has been denied for this request.";

/// Message returned for server-side failures
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Message returned when the request body cannot be read as the expected JSON
pub const INVALID_BODY_MESSAGE: &str = "The request body is invalid.";

/// Message returned when a path segment cannot be parsed
pub const INVALID_PATH_MESSAGE: &str = "The request path is invalid.";

/// HTTP-facing error with a status and a single envelope entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFailure {
    pub status: StatusCode,
    pub error_type: ApiErrorType,
    pub message: String,
}

impl ApiFailure {
    pub fn new(status: StatusCode, error_type: ApiErrorType, message: impl Into<String>) -> Self {
        Self {
            status,
            error_type,
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ApiErrorType::InvalidInputData, message)
    }

    /// Rejected body; the parser detail is only logged
    pub fn invalid_body(detail: impl fmt::Display) -> Self {
        log::debug!("Rejected request body: {}", detail);
        Self::invalid_input(INVALID_BODY_MESSAGE)
    }

    /// Rejected path parameters; the parser detail is only logged
    pub fn invalid_path(detail: impl fmt::Display) -> Self {
        log::debug!("Rejected request path: {}", detail);
        Self::invalid_input(INVALID_PATH_MESSAGE)
    }

    pub fn unauthorized() -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            ApiErrorType::AuthorizationError,
            AUTHORIZATION_FAILED_MESSAGE,
        )
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, ApiErrorType::ResourceNotFound, message)
    }

    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiErrorType::GeneralError,
            UNEXPECTED_ERROR_MESSAGE,
        )
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.error_type, self.status, self.message)
    }
}

impl ResponseError for ApiFailure {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status)
            .json(ApiResponse::<()>::error(self.error_type, self.message.clone()))
    }
}

/// Recovers the failure carried by an extractor error.
///
/// Extractor errors built by the JSON and path error handlers already wrap an
/// [`ApiFailure`]; anything else is reported as an invalid request body.
impl From<actix_web::Error> for ApiFailure {
    fn from(error: actix_web::Error) -> Self {
        match error.as_error::<ApiFailure>() {
            Some(failure) => failure.clone(),
            None => ApiFailure::invalid_body(error),
        }
    }
}

impl From<AuthError> for ApiFailure {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::ApplicationIdMissing | AuthError::ApplicationIdInvalid => {
                ApiFailure::invalid_input(error.to_string())
            }
            AuthError::UnknownPolicy { ref policy } => {
                log::error!("Handler referenced unregistered policy '{}'", policy);
                ApiFailure::internal()
            }
            other => {
                log::warn!("Authorization failure: {}", other);
                ApiFailure::unauthorized()
            }
        }
    }
}

impl From<TokenError> for ApiFailure {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::TokenGenerationFailed => {
                log::error!("Token generation failed");
                ApiFailure::internal()
            }
            other => {
                log::warn!("Token rejected: {}", other);
                ApiFailure::unauthorized()
            }
        }
    }
}

impl From<DomainError> for ApiFailure {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::Validation { message } => ApiFailure::invalid_input(message),
            DomainError::NotFound { message } => ApiFailure::not_found(message),
            DomainError::Auth(auth) => auth.into(),
            DomainError::Token(token) => token.into(),
            other => {
                log::error!("Request failed: {}", other);
                ApiFailure::internal()
            }
        }
    }
}
