use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use log::debug;

use crate::app_state::AppState;
use crate::domain::{Identity, MessageResponse};
use crate::errors::{StudentError, StudentOperation};

// Also mounted on `/student` and `/student/`, where the path has no id.
pub async fn delete_student(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    id: Option<Path<String>>,
) -> Result<impl IntoResponse, StudentError> {
    let id = id.map(|Path(id)| id).unwrap_or_default();
    let id = id.trim();
    if id.is_empty() {
        return Err(StudentError::NoIdProvided);
    }

    debug!("deleting student {} for {}", id, identity.username);

    let Ok(id) = id.parse::<i32>() else {
        return Err(StudentError::NotFound);
    };

    let deleted = state
        .student_store
        .delete_student(id)
        .await
        .map_err(|e| StudentError::store_failure(StudentOperation::Delete, e))?;

    if deleted == 0 {
        return Err(StudentError::NotFound);
    }

    Ok(Json(MessageResponse::new("Student deleted successfully")))
}
