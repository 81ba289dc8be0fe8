//! Token issuance endpoint

use actix_web::{web, HttpResponse};
use sr_core::StudentRepository;
use sr_shared::{dto::LoginRequest, ApiResponse};

use crate::app::AppState;
use crate::handlers::ApiFailure;

/// Handler for POST /auth/login
///
/// Anonymous access. Exchanges the front-end application identifier for a
/// signed token.
///
/// # Request Body
///
/// ```json
/// { "applicationId": "f45dbc57-7d34-4f14-8c7b-d9c21ea2f523" }
/// ```
///
/// # Response
///
/// ```json
/// {
///     "success": true,
///     "value": { "applicationId": "...", "token": "eyJ..." },
///     "errors": []
/// }
/// ```
pub async fn login<R>(
    state: web::Data<AppState<R>>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiFailure>
where
    R: StudentRepository + 'static,
{
    let request = request.into_inner();
    let response = state
        .auth_service
        .login(request.application_id.as_deref())?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}
