use welds::connections::any::AnyClient;
use welds::Client;

use crate::domain::{NewStudent, StudentModel, StudentRecord, StudentStore, StudentStoreError};

// Student store backed by the `student` table through the welds ORM.
pub struct SqlStudentStore {
    client: AnyClient,
}

impl SqlStudentStore {
    pub fn new(client: AnyClient) -> Self {
        Self { client }
    }
}

// `?` placeholders are understood by both the MySQL and SQLite backends.
const DELETE_STUDENT_SQL: &str = "DELETE FROM student WHERE ID = ?";

fn database_error(e: impl std::fmt::Display) -> StudentStoreError {
    StudentStoreError::DatabaseError(e.to_string())
}

#[async_trait::async_trait]
impl StudentStore for SqlStudentStore {
    async fn list_students(&self) -> Result<Vec<StudentRecord>, StudentStoreError> {
        let rows = StudentModel::all()
            .run(&self.client)
            .await
            .map_err(database_error)?;

        Ok(rows
            .into_iter()
            .map(|row| StudentRecord::from(row.into_inner()))
            .collect())
    }

    async fn add_student(&self, student: NewStudent) -> Result<StudentRecord, StudentStoreError> {
        let (name, email) = student.into_columns()?;

        let mut student_model = StudentModel::new();
        student_model.name = name;
        student_model.email = email;
        student_model
            .save(&self.client)
            .await
            .map_err(database_error)?;

        Ok(StudentRecord::from(student_model.into_inner()))
    }

    async fn update_student(
        &self,
        id: i32,
        student: NewStudent,
    ) -> Result<u64, StudentStoreError> {
        let (name, email) = student.into_columns()?;

        let Some(mut student_model) = StudentModel::find_by_id(&self.client, id)
            .await
            .map_err(database_error)?
        else {
            return Ok(0);
        };

        student_model.name = name;
        student_model.email = email;
        student_model
            .save(&self.client)
            .await
            .map_err(database_error)?;

        Ok(1)
    }

    async fn delete_student(&self, id: i32) -> Result<u64, StudentStoreError> {
        // Single statement so the affected count comes from the delete itself.
        let result = self
            .client
            .execute(DELETE_STUDENT_SQL, &[&id])
            .await
            .map_err(database_error)?;

        Ok(result.rows_affected())
    }
}
