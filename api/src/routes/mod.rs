//! Route registration

use actix_web::web;
use sr_core::StudentRepository;

pub mod auth;
pub mod health;
pub mod students;

/// Registers every route of the API
pub fn configure<R>(cfg: &mut web::ServiceConfig)
where
    R: StudentRepository + 'static,
{
    cfg.route("/health", web::get().to(health::health_check))
        .service(web::scope("/auth").route("/login", web::post().to(auth::login::<R>)))
        .service(
            web::scope("/students")
                .route("", web::get().to(students::list::<R>))
                .route("", web::post().to(students::create::<R>))
                .route("/{id}", web::get().to(students::get::<R>))
                .route("/{id}", web::put().to(students::update::<R>))
                .route("/{id}", web::delete().to(students::delete::<R>)),
        );
}
