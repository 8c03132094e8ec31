use super::StudentStoreError;
use crate::domain::{NewStudent, StudentRecord};

// This trait represents the interface all concrete student stores should implement.
// Implementations own their own synchronisation; callers share them behind an `Arc`.
#[async_trait::async_trait]
pub trait StudentStore: Send + Sync {
    async fn list_students(&self) -> Result<Vec<StudentRecord>, StudentStoreError>;
    async fn add_student(&self, student: NewStudent) -> Result<StudentRecord, StudentStoreError>;
    /// Returns the number of rows touched; `0` when no row has this id.
    async fn update_student(&self, id: i32, student: NewStudent)
        -> Result<u64, StudentStoreError>;
    /// Returns the number of rows removed; `0` when no row has this id.
    async fn delete_student(&self, id: i32) -> Result<u64, StudentStoreError>;
}
