//! Bearer-token ingress filter.
//!
//! Runs before routing on every request. A presented token is validated once
//! and the outcome is attached to the request as an [`Authentication`]; the
//! filter itself never rejects. Deciding whether a route needs a principal is
//! left to the authorization gate.

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use sr_core::{Authentication, TokenService};
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

const BEARER_SCHEME: &str = "Bearer";

/// Ingress filter factory
#[derive(Clone)]
pub struct JwtAuth {
    token_service: Arc<TokenService>,
}

impl JwtAuth {
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            token_service: Arc::clone(&self.token_service),
        }))
    }
}

pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let token_service = Arc::clone(&self.token_service);

        Box::pin(async move {
            let authentication = match extract_bearer_token(&req) {
                None => Authentication::Anonymous,
                Some(token) => match token_service.validate(&token) {
                    Ok(principal) => Authentication::Authenticated(principal),
                    Err(err) => {
                        log::debug!("Rejected bearer token on {}: {}", req.path(), err);
                        Authentication::Rejected(err)
                    }
                },
            };

            req.extensions_mut().insert(authentication);

            service.call(req).await
        })
    }
}

/// Extracts the Bearer token from the Authorization header.
///
/// The scheme name is matched case-insensitively.
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    let (scheme, token) = req
        .headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .trim_start()
        .split_once(' ')?;

    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return None;
    }

    Some(token.trim())
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
}

/// Authentication outcome attached by [`JwtAuth`].
///
/// Requests that bypassed the filter are treated as anonymous.
pub fn request_authentication(req: &HttpRequest) -> Authentication {
    req.extensions()
        .get::<Authentication>()
        .cloned()
        .unwrap_or(Authentication::Anonymous)
}
