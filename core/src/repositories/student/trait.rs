//! Student repository trait defining the interface for student persistence.

use async_trait::async_trait;

use crate::domain::entities::Student;
use crate::errors::DomainError;

/// Repository trait for Student entity persistence operations
///
/// Implementations report storage failures as `DomainError::Repository`.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Insert a student and return it with its assigned id
    async fn add(&self, student: Student) -> Result<Student, DomainError>;

    async fn get_all(&self) -> Result<Vec<Student>, DomainError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<Student>, DomainError>;

    async fn exists(&self, id: i64) -> Result<bool, DomainError>;

    /// Overwrite a stored student
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - No student with `student.id`
    async fn update(&self, student: &Student) -> Result<(), DomainError>;

    /// Remove a student
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - No student with `id`
    async fn delete(&self, id: i64) -> Result<(), DomainError>;

    /// Whether any student is stored
    async fn any(&self) -> Result<bool, DomainError>;
}
