//! Authorization gate run at the top of every protected handler

use actix_web::HttpRequest;
use sr_core::{Authentication, AuthorizationService, Principal};

use super::error::ApiFailure;
use crate::middleware::request_authentication;

/// Checks a request's authentication outcome against a named policy.
///
/// Denials surface as a single 401 response; the concrete reason goes to the
/// log only. The gate must run before any side effect of the handler.
#[derive(Debug, Clone, Default)]
pub struct AuthorizationGate {
    authorization: AuthorizationService,
}

impl AuthorizationGate {
    pub fn new(authorization: AuthorizationService) -> Self {
        Self { authorization }
    }

    pub fn authorization(&self) -> &AuthorizationService {
        &self.authorization
    }

    /// Admit the request under `policy`, returning its principal
    pub fn guard(&self, req: &HttpRequest, policy: &str) -> Result<Principal, ApiFailure> {
        let authentication = request_authentication(req);
        let decision = self.authorization.decide(&authentication, policy)?;

        if let Some(reason) = decision.denied_reason {
            log::warn!(
                "Denied {} {} under policy '{}': {}",
                req.method(),
                req.path(),
                policy,
                reason
            );
            return Err(ApiFailure::unauthorized());
        }

        match authentication {
            Authentication::Authenticated(principal) => Ok(principal),
            _ => Err(ApiFailure::unauthorized()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test::TestRequest, HttpMessage};
    use sr_core::{IdentityClaim, TokenError};
    use sr_shared::{APPLICATION_ID_CLAIM, FRONT_END_APPLICATION_ID, FRONT_END_APPLICATION_POLICY};

    fn request_with(authentication: Authentication) -> HttpRequest {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(authentication);
        req
    }

    fn principal(application_id: &str) -> Principal {
        Principal::new(
            vec![IdentityClaim::new(APPLICATION_ID_CLAIM, application_id)],
            "issuer",
            "audience",
            chrono::Utc::now() + chrono::Duration::days(1),
        )
    }

    #[test]
    fn test_admits_front_end_principal() {
        let gate = AuthorizationGate::default();
        let req = request_with(Authentication::Authenticated(principal(FRONT_END_APPLICATION_ID)));

        let admitted = gate.guard(&req, FRONT_END_APPLICATION_POLICY).unwrap();
        assert!(admitted.has_claim(APPLICATION_ID_CLAIM, FRONT_END_APPLICATION_ID));
    }

    #[test]
    fn test_denials_share_one_response() {
        let gate = AuthorizationGate::default();
        let outcomes = [
            Authentication::Anonymous,
            Authentication::Rejected(TokenError::Expired),
            Authentication::Authenticated(principal("someone-else")),
        ];

        for outcome in outcomes {
            let req = request_with(outcome);
            assert_eq!(
                gate.guard(&req, FRONT_END_APPLICATION_POLICY).unwrap_err(),
                ApiFailure::unauthorized()
            );
        }
    }

    #[test]
    fn test_unknown_policy_is_server_error() {
        let gate = AuthorizationGate::default();
        let req = request_with(Authentication::Authenticated(principal(FRONT_END_APPLICATION_ID)));

        assert_eq!(gate.guard(&req, "Unregistered").unwrap_err(), ApiFailure::internal());
    }
}
