use axum::{http::StatusCode, response::IntoResponse, Json};
use thiserror::Error;

use crate::domain::MessageResponse;

#[derive(Error, Debug)]
pub enum LoginError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for LoginError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            LoginError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            LoginError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(MessageResponse::new(self.to_string()))).into_response()
    }
}
