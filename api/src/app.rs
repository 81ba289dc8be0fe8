//! Application state and factory
//!
//! This module holds the shared services and builds the Actix-web
//! application around them.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error, HttpResponse,
};
use sr_core::{
    AuthenticationService, AuthorizationService, StudentRepository, StudentService, TokenService,
};
use sr_shared::{ApiErrorType, ApiResponse, CorsConfig};

use crate::handlers::{ApiFailure, AuthorizationGate};
use crate::middleware::{create_cors, JwtAuth};
use crate::routes;

/// Services shared by every worker
pub struct AppState<R: StudentRepository> {
    pub token_service: Arc<TokenService>,
    pub auth_service: AuthenticationService,
    pub gate: AuthorizationGate,
    pub students: StudentService<R>,
}

impl<R: StudentRepository> AppState<R> {
    pub fn new(
        token_service: Arc<TokenService>,
        authorization: AuthorizationService,
        repository: Arc<R>,
    ) -> Self {
        Self {
            auth_service: AuthenticationService::new(Arc::clone(&token_service)),
            token_service,
            gate: AuthorizationGate::new(authorization),
            students: StudentService::new(repository),
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<R>(
    app_state: web::Data<AppState<R>>,
    cors: &CorsConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    R: StudentRepository + 'static,
{
    let jwt_auth = JwtAuth::new(Arc::clone(&app_state.token_service));

    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(|err, _req| {
            ApiFailure::invalid_body(err).into()
        }))
        .app_data(web::PathConfig::default().error_handler(|err, _req| {
            ApiFailure::invalid_path(err).into()
        }))
        // Last wrap runs first
        .wrap(jwt_auth)
        .wrap(create_cors(cors))
        .wrap(Logger::default())
        .configure(routes::configure::<R>)
        .default_service(web::route().to(not_found))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::<()>::error(
        ApiErrorType::ResourceNotFound,
        "The requested resource was not found.",
    ))
}
