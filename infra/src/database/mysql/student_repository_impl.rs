//! MySQL implementation of the StudentRepository trait.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use sr_core::domain::entities::Student;
use sr_core::errors::DomainError;
use sr_core::repositories::StudentRepository;

/// MySQL implementation of StudentRepository
pub struct MySqlStudentRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlStudentRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_student(row: &sqlx::mysql::MySqlRow) -> Result<Student, DomainError> {
        Ok(Student {
            id: row.try_get("id").map_err(db_error)?,
            first_name: row.try_get("first_name").map_err(db_error)?,
            last_name: row.try_get("last_name").map_err(db_error)?,
        })
    }
}

fn db_error(e: sqlx::Error) -> DomainError {
    tracing::error!(error = %e, "Student query failed");
    DomainError::Repository {
        message: format!("Database query failed: {}", e),
    }
}

#[async_trait]
impl StudentRepository for MySqlStudentRepository {
    async fn add(&self, mut student: Student) -> Result<Student, DomainError> {
        let result = sqlx::query("INSERT INTO students (first_name, last_name) VALUES (?, ?)")
            .bind(&student.first_name)
            .bind(&student.last_name)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        student.id = result.last_insert_id() as i64;
        Ok(student)
    }

    async fn get_all(&self) -> Result<Vec<Student>, DomainError> {
        let rows = sqlx::query("SELECT id, first_name, last_name FROM students ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(db_error)?;

        rows.iter().map(Self::row_to_student).collect()
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Student>, DomainError> {
        let row = sqlx::query("SELECT id, first_name, last_name FROM students WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error)?;

        row.as_ref().map(Self::row_to_student).transpose()
    }

    async fn exists(&self, id: i64) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM students WHERE id = ?) AS found")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(db_error)?;

        let found: i64 = row.try_get("found").map_err(db_error)?;
        Ok(found == 1)
    }

    async fn update(&self, student: &Student) -> Result<(), DomainError> {
        // MySQL reports 0 affected rows for an unchanged row, so existence is
        // checked separately.
        let result = sqlx::query("UPDATE students SET first_name = ?, last_name = ? WHERE id = ?")
            .bind(&student.first_name)
            .bind(&student.last_name)
            .bind(student.id)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        if result.rows_affected() == 0 && !self.exists(student.id).await? {
            return Err(DomainError::student_not_found(student.id));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::student_not_found(id));
        }
        Ok(())
    }

    async fn any(&self) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM students) AS found")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error)?;

        let found: i64 = row.try_get("found").map_err(db_error)?;
        Ok(found == 1)
    }
}
