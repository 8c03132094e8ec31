use axum::extract::State;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use log::debug;

use crate::app_state::AppState;
use crate::domain::Identity;
use crate::errors::{StudentError, StudentOperation};

pub async fn list_students(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> Result<impl IntoResponse, StudentError> {
    debug!("listing students for {}", identity.username);

    let students = state
        .student_store
        .list_students()
        .await
        .map_err(|e| StudentError::store_failure(StudentOperation::List, e))?;

    Ok(Json(students))
}
