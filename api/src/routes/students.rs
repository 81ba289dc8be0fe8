//! Student CRUD endpoints.
//!
//! Every handler runs the authorization gate under the front-end application
//! policy before touching the service. Body and path extraction failures are
//! held back until the gate has admitted the caller, so anonymous requests
//! are always answered with the authorization denial.

use actix_web::{web, HttpRequest, HttpResponse};
use sr_core::StudentRepository;
use sr_shared::{
    dto::{CreateStudentDto, UpdateStudentDto},
    ApiResponse, FRONT_END_APPLICATION_POLICY,
};

use crate::app::AppState;
use crate::handlers::ApiFailure;

type StudentId = Result<web::Path<i64>, ApiFailure>;
type Body<T> = Result<web::Json<T>, ApiFailure>;

/// GET /students
pub async fn list<R>(
    req: HttpRequest,
    state: web::Data<AppState<R>>,
) -> Result<HttpResponse, ApiFailure>
where
    R: StudentRepository + 'static,
{
    state.gate.guard(&req, FRONT_END_APPLICATION_POLICY)?;

    let students = state.students.list().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(students)))
}

/// GET /students/{id}
pub async fn get<R>(
    req: HttpRequest,
    state: web::Data<AppState<R>>,
    id: StudentId,
) -> Result<HttpResponse, ApiFailure>
where
    R: StudentRepository + 'static,
{
    state.gate.guard(&req, FRONT_END_APPLICATION_POLICY)?;

    let student = state.students.get(id?.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(student)))
}

/// POST /students
pub async fn create<R>(
    req: HttpRequest,
    state: web::Data<AppState<R>>,
    body: Body<CreateStudentDto>,
) -> Result<HttpResponse, ApiFailure>
where
    R: StudentRepository + 'static,
{
    state.gate.guard(&req, FRONT_END_APPLICATION_POLICY)?;

    let student = state.students.create(body?.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(student)))
}

/// PUT /students/{id}
pub async fn update<R>(
    req: HttpRequest,
    state: web::Data<AppState<R>>,
    id: StudentId,
    body: Body<UpdateStudentDto>,
) -> Result<HttpResponse, ApiFailure>
where
    R: StudentRepository + 'static,
{
    state.gate.guard(&req, FRONT_END_APPLICATION_POLICY)?;

    let id = id?.into_inner();
    let student = state.students.update(id, body?.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(student)))
}

/// DELETE /students/{id}
pub async fn delete<R>(
    req: HttpRequest,
    state: web::Data<AppState<R>>,
    id: StudentId,
) -> Result<HttpResponse, ApiFailure>
where
    R: StudentRepository + 'static,
{
    state.gate.guard(&req, FRONT_END_APPLICATION_POLICY)?;

    state.students.delete(id?.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::empty()))
}
