use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum StudentStoreError {
    #[error("constraint violation: {0}")]
    ConstraintViolation(&'static str),
    #[error("database error: {0}")]
    DatabaseError(String),
}
