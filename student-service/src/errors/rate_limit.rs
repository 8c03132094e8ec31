use axum::{
    http::{header::RETRY_AFTER, StatusCode},
    response::IntoResponse,
    Json,
};
use thiserror::Error;

use crate::domain::MessageResponse;

#[derive(Error, Debug, PartialEq)]
pub enum RateLimitError {
    #[error("Too many requests, please try again later.")]
    TooManyRequests { retry_after_secs: u64 },
}

impl IntoResponse for RateLimitError {
    fn into_response(self) -> axum::response::Response {
        let RateLimitError::TooManyRequests { retry_after_secs } = self;
        (
            StatusCode::TOO_MANY_REQUESTS,
            [(RETRY_AFTER, retry_after_secs.to_string())],
            Json(MessageResponse::new(self.to_string())),
        )
            .into_response()
    }
}
