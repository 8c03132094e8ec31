use serde::{Deserialize, Serialize};

use super::data_stores::StudentStoreError;

/// A row of the `student` table as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Column values for an insert or update. Either may be missing; only the
/// store decides whether that is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewStudent {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl NewStudent {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }

    /// Applies the table's NOT NULL constraints, yielding `(name, email)`.
    pub fn into_columns(self) -> Result<(String, String), StudentStoreError> {
        let name = self
            .name
            .ok_or(StudentStoreError::ConstraintViolation("student.name cannot be null"))?;
        let email = self
            .email
            .ok_or(StudentStoreError::ConstraintViolation("student.email cannot be null"))?;
        Ok((name, email))
    }
}
