use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

// Both kinds surface as a bare 403; they differ only in what gets logged.
#[derive(Error, Debug, PartialEq)]
pub enum AuthError {
    #[error("no bearer credential presented")]
    NoCredential,

    #[error("bearer credential failed verification")]
    InvalidCredential,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> axum::response::Response {
        StatusCode::FORBIDDEN.into_response()
    }
}
