use axum::extract::State;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use log::debug;

use crate::app_state::AppState;
use crate::domain::{Identity, StudentRequestBody};
use crate::errors::{StudentError, StudentOperation};

// Fields go to the store untouched; missing values fail there, not here.
// A missing or unreadable body counts as one with no fields.
pub async fn create_student(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    request: Option<Json<StudentRequestBody>>,
) -> Result<impl IntoResponse, StudentError> {
    debug!("creating student for {}", identity.username);

    let request = request.map(|Json(body)| body).unwrap_or_default();

    let student = state
        .student_store
        .add_student(request.into())
        .await
        .map_err(|e| StudentError::store_failure(StudentOperation::Create, e))?;

    Ok(Json(student))
}
