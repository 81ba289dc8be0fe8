//! # Student Records API
//!
//! HTTP surface over the core services: the login endpoint that issues
//! application tokens, the ingress filter that validates them, the
//! authorization gate, and the policy-protected student endpoints.

pub mod app;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState};
