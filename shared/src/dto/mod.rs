//! Request and response bodies exchanged between the API and its client

pub mod auth;
pub mod student;

pub use auth::{LoginRequest, LoginResponse};
pub use student::{CreateStudentDto, StudentDto, UpdateStudentDto};
