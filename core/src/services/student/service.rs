use std::sync::Arc;

use sr_shared::dto::{CreateStudentDto, StudentDto, UpdateStudentDto};
use validator::Validate;

use crate::domain::entities::Student;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::StudentRepository;

/// Thin layer over the student repository.
///
/// Runs only after the authorization gate has admitted the request.
pub struct StudentService<R: StudentRepository> {
    repository: Arc<R>,
}

impl<R: StudentRepository> StudentService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> DomainResult<Vec<StudentDto>> {
        let students = self.repository.get_all().await?;
        Ok(students.into_iter().map(StudentDto::from).collect())
    }

    pub async fn get(&self, id: i64) -> DomainResult<StudentDto> {
        check_id(id)?;
        let student = self.find(id).await?;
        Ok(student.into())
    }

    pub async fn create(&self, dto: CreateStudentDto) -> DomainResult<StudentDto> {
        validate_input(&dto)?;
        let student = self.repository.add(Student::from(dto)).await?;
        tracing::info!(student_id = student.id, "Student created");
        Ok(student.into())
    }

    pub async fn update(&self, id: i64, dto: UpdateStudentDto) -> DomainResult<StudentDto> {
        check_id(id)?;
        validate_input(&dto)?;

        let mut student = self.find(id).await?;
        student.apply(dto);
        self.repository.update(&student).await?;

        tracing::info!(student_id = id, "Student updated");
        Ok(student.into())
    }

    pub async fn delete(&self, id: i64) -> DomainResult<()> {
        check_id(id)?;
        if !self.repository.exists(id).await? {
            return Err(DomainError::student_not_found(id));
        }

        self.repository.delete(id).await?;
        tracing::info!(student_id = id, "Student deleted");
        Ok(())
    }

    async fn find(&self, id: i64) -> DomainResult<Student> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| DomainError::student_not_found(id))
    }
}

fn check_id(id: i64) -> DomainResult<()> {
    if id <= 0 {
        return Err(DomainError::Validation {
            message: format!("Invalid student id: {}", id),
        });
    }
    Ok(())
}

fn validate_input(input: &impl Validate) -> DomainResult<()> {
    input.validate().map_err(|e| DomainError::Validation {
        message: format!("Invalid student data: {}", e),
    })
}
