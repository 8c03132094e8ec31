use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use log::debug;

use crate::app_state::AppState;
use crate::domain::{Identity, NewStudent, StudentRequestBody, UpdateStudentResponse};
use crate::errors::{StudentError, StudentOperation};

/// Overwrites name and email of the student with the given id.
///
/// An id that matches nothing is not an error: the response is a 200 with
/// `affectedCount: 0`. A missing body is treated as one with no fields.
pub async fn update_student(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
    request: Option<Json<StudentRequestBody>>,
) -> Result<impl IntoResponse, StudentError> {
    debug!("updating student {} for {}", id, identity.username);

    let student = NewStudent::from(request.map(|Json(body)| body).unwrap_or_default());
    let affected_count = match id.trim().parse::<i32>() {
        Ok(id) => state
            .student_store
            .update_student(id, student)
            .await
            .map_err(|e| StudentError::store_failure(StudentOperation::Update, e))?,
        // A non-numeric id cannot match a row, but the fields are still checked.
        Err(_) => {
            student
                .into_columns()
                .map_err(|e| StudentError::store_failure(StudentOperation::Update, e))?;
            0
        }
    };

    Ok(Json(UpdateStudentResponse { affected_count }))
}
