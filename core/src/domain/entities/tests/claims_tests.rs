//! Unit tests for token claims

use chrono::{Duration, TimeZone, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use sr_shared::constants::{APPLICATION_ID_CLAIM, FRONT_END_APPLICATION_ID};

use crate::domain::entities::claims::{Claims, TOKEN_LIFETIME_DAYS};
use crate::errors::TokenError;

fn sample_claims() -> Claims {
    let issued_at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    Claims::for_application(
        "students-api",
        "students-client",
        issued_at,
        Duration::days(TOKEN_LIFETIME_DAYS),
    )
}

#[test]
fn test_application_claims() {
    let claims = sample_claims();

    assert_eq!(claims.iss, "students-api");
    assert_eq!(claims.aud, "students-client");
    assert_eq!(claims.exp - claims.iat, 3 * 24 * 60 * 60);
    assert_eq!(claims.application_id(), Some(FRONT_END_APPLICATION_ID));
    assert_eq!(claims.identity.len(), 1);
}

#[test]
fn test_identity_claims_are_flattened_into_payload() {
    let claims = sample_claims();
    let payload = serde_json::to_value(&claims).unwrap();

    assert_eq!(payload[APPLICATION_ID_CLAIM], FRONT_END_APPLICATION_ID);
    assert_eq!(payload["iss"], "students-api");
    assert!(payload.get("identity").is_none());
}

#[test]
fn test_expiry_has_no_skew_tolerance() {
    let claims = sample_claims();
    let expires_at = claims.expires_at().unwrap();

    assert!(!claims.is_expired_at(expires_at - Duration::seconds(1)));
    assert!(claims.is_expired_at(expires_at));
    assert!(claims.is_expired_at(expires_at + Duration::seconds(1)));
}

#[test]
fn test_decode_unverified_ignores_key_and_expiry() {
    let claims = sample_claims();
    let token = encode(
        &Header::new(jsonwebtoken::Algorithm::HS512),
        &claims,
        &EncodingKey::from_secret(b"a key the holder does not know"),
    )
    .unwrap();

    let decoded = Claims::decode_unverified(&token).unwrap();
    assert_eq!(decoded, claims);
    assert!(decoded.is_expired());
}

#[test]
fn test_decode_unverified_rejects_garbage() {
    assert_eq!(Claims::decode_unverified("not-a-token"), Err(TokenError::Malformed));
    assert_eq!(Claims::decode_unverified(""), Err(TokenError::Malformed));
}
