//! Type definitions shared across crates
//!
//! - `response` - the standard `{success, value, errors}` envelope

pub mod response;

pub use response::{ApiError, ApiErrorType, ApiResponse};
