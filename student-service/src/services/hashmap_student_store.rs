use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::domain::{NewStudent, StudentRecord, StudentStore, StudentStoreError};

#[derive(Default)]
struct StudentTable {
    last_id: i32,
    rows: HashMap<i32, StudentRecord>,
}

/// In-memory student store with auto-incrementing ids.
#[derive(Default)]
pub struct HashmapStudentStore {
    table: RwLock<StudentTable>,
}

impl HashmapStudentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get_student_count(&self) -> usize {
        self.table.read().await.rows.len()
    }
}

#[async_trait::async_trait]
impl StudentStore for HashmapStudentStore {
    async fn list_students(&self) -> Result<Vec<StudentRecord>, StudentStoreError> {
        let table = self.table.read().await;
        let mut students: Vec<StudentRecord> = table.rows.values().cloned().collect();
        students.sort_by_key(|s| s.id);
        Ok(students)
    }

    async fn add_student(&self, student: NewStudent) -> Result<StudentRecord, StudentStoreError> {
        let (name, email) = student.into_columns()?;

        let mut table = self.table.write().await;
        let id = table
            .last_id
            .checked_add(1)
            .ok_or(StudentStoreError::DatabaseError("student id sequence exhausted".to_owned()))?;
        table.last_id = id;

        let record = StudentRecord { id, name, email };
        table.rows.insert(id, record.clone());
        Ok(record)
    }

    async fn update_student(
        &self,
        id: i32,
        student: NewStudent,
    ) -> Result<u64, StudentStoreError> {
        let (name, email) = student.into_columns()?;

        let mut table = self.table.write().await;
        match table.rows.get_mut(&id) {
            Some(record) => {
                record.name = name;
                record.email = email;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_student(&self, id: i32) -> Result<u64, StudentStoreError> {
        let mut table = self.table.write().await;
        Ok(table.rows.remove(&id).map_or(0, |_| 1))
    }
}
