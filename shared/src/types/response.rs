//! API response envelope shared by the server and its client

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of error kinds a client can branch on.
///
/// Serialized by variant name (`"AuthorizationError"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApiErrorType {
    GeneralError,
    InvalidInputData,
    ResourceNotFound,
    AuthorizationError,
}

impl fmt::Display for ApiErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ApiErrorType::GeneralError => "GeneralError",
            ApiErrorType::InvalidInputData => "InvalidInputData",
            ApiErrorType::ResourceNotFound => "ResourceNotFound",
            ApiErrorType::AuthorizationError => "AuthorizationError",
        };
        f.write_str(name)
    }
}

/// Single entry of the envelope's error list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub error_type: ApiErrorType,
    pub error_message: String,
}

impl ApiError {
    pub fn new(error_type: ApiErrorType, error_message: impl Into<String>) -> Self {
        Self {
            error_type,
            error_message: error_message.into(),
        }
    }
}

/// Standard API response wrapper
///
/// `{ "success": bool, "value": T | null, "errors": [{ "errorType", "errorMessage" }] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,

    /// Response payload, `null` on failure
    pub value: Option<T>,

    /// Errors, empty on success
    #[serde(default)]
    pub errors: Vec<ApiError>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn success(value: T) -> Self {
        Self {
            success: true,
            value: Some(value),
            errors: Vec::new(),
        }
    }

    /// Create a failed response carrying a single error
    pub fn error(error_type: ApiErrorType, message: impl Into<String>) -> Self {
        Self::from_errors(vec![ApiError::new(error_type, message)])
    }

    /// Create a failed response carrying several errors
    pub fn from_errors(errors: Vec<ApiError>) -> Self {
        Self {
            success: false,
            value: None,
            errors,
        }
    }

    /// Check if the response is successful
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Whether any error in the list has the given kind
    pub fn has_error(&self, error_type: ApiErrorType) -> bool {
        self.errors.iter().any(|e| e.error_type == error_type)
    }

    /// First error kind, if any
    pub fn first_error_type(&self) -> Option<ApiErrorType> {
        self.errors.first().map(|e| e.error_type)
    }

    /// Extract the value, consuming the response
    pub fn into_value(self) -> Option<T> {
        self.value
    }
}

impl ApiResponse<()> {
    /// Successful response without a payload; `value` serializes as `null`
    pub fn empty() -> Self {
        Self {
            success: true,
            value: None,
            errors: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_envelope_shape() {
        let response: ApiResponse<()> =
            ApiResponse::error(ApiErrorType::AuthorizationError, "Access denied.");

        let body = serde_json::to_value(&response).unwrap();
        assert_eq!(
            body,
            json!({
                "success": false,
                "value": null,
                "errors": [{ "errorType": "AuthorizationError", "errorMessage": "Access denied." }]
            })
        );
    }

    #[test]
    fn test_success_envelope_parses_without_errors_field() {
        let parsed: ApiResponse<i64> =
            serde_json::from_value(json!({ "success": true, "value": 7 })).unwrap();

        assert!(parsed.is_success());
        assert!(parsed.errors.is_empty());
        assert_eq!(parsed.into_value(), Some(7));
    }

    #[test]
    fn test_has_error() {
        let response: ApiResponse<()> =
            ApiResponse::error(ApiErrorType::InvalidInputData, "Application ID is missing.");
        assert!(response.has_error(ApiErrorType::InvalidInputData));
        assert!(!response.has_error(ApiErrorType::AuthorizationError));
        assert_eq!(response.first_error_type(), Some(ApiErrorType::InvalidInputData));
    }
}
