//! Student record entity.

use serde::{Deserialize, Serialize};
use sr_shared::dto::{CreateStudentDto, StudentDto, UpdateStudentDto};

/// A student record. `id` is assigned by the repository on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl Student {
    /// Creates an unsaved student (id 0)
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: 0,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Overwrites the editable fields
    pub fn apply(&mut self, update: UpdateStudentDto) {
        self.first_name = update.first_name;
        self.last_name = update.last_name;
    }
}

impl From<CreateStudentDto> for Student {
    fn from(dto: CreateStudentDto) -> Self {
        Student::new(dto.first_name, dto.last_name)
    }
}

impl From<Student> for StudentDto {
    fn from(student: Student) -> Self {
        StudentDto {
            id: student.id,
            first_name: student.first_name,
            last_name: student.last_name,
        }
    }
}
