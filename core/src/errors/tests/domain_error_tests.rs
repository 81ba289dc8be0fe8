use sr_shared::ConfigurationError;

use crate::errors::{AuthError, DomainError, TokenError};

#[test]
fn test_bridges_from_specific_errors() {
    let err: DomainError = TokenError::Expired.into();
    assert!(matches!(err, DomainError::Token(TokenError::Expired)));

    let err: DomainError = AuthError::ApplicationIdMissing.into();
    assert!(matches!(err, DomainError::Auth(AuthError::ApplicationIdMissing)));

    let err: DomainError = ConfigurationError::MissingSetting("Jwt:SigningKey".into()).into();
    assert!(err.to_string().contains("Jwt:SigningKey"));
}

#[test]
fn test_login_messages() {
    assert_eq!(AuthError::ApplicationIdMissing.to_string(), "Application ID is missing.");
    assert_eq!(AuthError::ApplicationIdInvalid.to_string(), "Application ID is invalid.");
    assert!(AuthError::ApplicationIdInvalid.is_invalid_input());
    assert!(!AuthError::MissingCredential.is_invalid_input());
}

#[test]
fn test_credential_rejection_keeps_reason() {
    let err = AuthError::InvalidCredential(TokenError::InvalidAudience);
    assert_eq!(err.to_string(), "Credential rejected: Invalid audience");
}

#[test]
fn test_student_not_found_message() {
    match DomainError::student_not_found(42) {
        DomainError::NotFound { message } => {
            assert_eq!(message, "Failed to find a student with ID: 42");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}
