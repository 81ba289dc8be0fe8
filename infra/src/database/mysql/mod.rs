//! MySQL repository implementations

mod student_repository_impl;

pub use student_repository_impl::MySqlStudentRepository;
