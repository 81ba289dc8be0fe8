//! In-memory implementation of StudentRepository
//!
//! Used when no database is configured, and by tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::Student;
use crate::errors::DomainError;

use super::trait_::StudentRepository;

/// In-memory student repository. Ids start at 1.
#[derive(Clone)]
pub struct InMemoryStudentRepository {
    students: Arc<RwLock<BTreeMap<i64, Student>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self {
            students: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    /// Number of stored students
    pub async fn count(&self) -> usize {
        self.students.read().await.len()
    }
}

impl Default for InMemoryStudentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn add(&self, mut student: Student) -> Result<Student, DomainError> {
        let mut students = self.students.write().await;
        student.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        students.insert(student.id, student.clone());
        Ok(student)
    }

    async fn get_all(&self) -> Result<Vec<Student>, DomainError> {
        let students = self.students.read().await;
        Ok(students.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Student>, DomainError> {
        let students = self.students.read().await;
        Ok(students.get(&id).cloned())
    }

    async fn exists(&self, id: i64) -> Result<bool, DomainError> {
        let students = self.students.read().await;
        Ok(students.contains_key(&id))
    }

    async fn update(&self, student: &Student) -> Result<(), DomainError> {
        let mut students = self.students.write().await;

        match students.get_mut(&student.id) {
            Some(stored) => {
                *stored = student.clone();
                Ok(())
            }
            None => Err(DomainError::student_not_found(student.id)),
        }
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let mut students = self.students.write().await;

        match students.remove(&id) {
            Some(_) => Ok(()),
            None => Err(DomainError::student_not_found(id)),
        }
    }

    async fn any(&self) -> Result<bool, DomainError> {
        let students = self.students.read().await;
        Ok(!students.is_empty())
    }
}
