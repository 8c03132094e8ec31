use std::fmt;

use axum::{http::StatusCode, response::IntoResponse, Json};
use log::error;
use thiserror::Error;

use crate::domain::{MessageResponse, StudentStoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentOperation {
    List,
    Create,
    Update,
    Delete,
}

impl StudentOperation {
    // Fixed text sent to the caller when the store fails.
    pub fn failure_message(&self) -> &'static str {
        match self {
            StudentOperation::List => "Internal Server Error",
            StudentOperation::Create => "Error creating student",
            StudentOperation::Update => "Error updating student",
            StudentOperation::Delete => "Error deleting student",
        }
    }
}

impl fmt::Display for StudentOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StudentOperation::List => "list",
            StudentOperation::Create => "create",
            StudentOperation::Update => "update",
            StudentOperation::Delete => "delete",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum StudentError {
    #[error("No ID provided")]
    NoIdProvided,

    #[error("Student not found")]
    NotFound,

    #[error("{}", .0.failure_message())]
    StoreFailure(StudentOperation),
}

impl StudentError {
    /// Logs the store error and hides it behind the operation's fixed message.
    pub fn store_failure(operation: StudentOperation, err: StudentStoreError) -> Self {
        error!("Error executing {} query: {}", operation, err);
        StudentError::StoreFailure(operation)
    }
}

impl IntoResponse for StudentError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            StudentError::NoIdProvided => StatusCode::BAD_REQUEST,
            StudentError::NotFound => StatusCode::NOT_FOUND,
            StudentError::StoreFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(MessageResponse::new(self.to_string()))).into_response()
    }
}
