use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use log::{error, info, warn};

use crate::app_state::AppState;
use crate::domain::{CredentialError, LoginRequestBody, LoginResponse};
use crate::errors::LoginError;

pub async fn login(
    State(state): State<AppState>,
    request: Option<Json<LoginRequestBody>>,
) -> Result<impl IntoResponse, LoginError> {
    let credentials = request.map(|Json(body)| body);

    let identity = state
        .credential_verifier
        .verify(credentials)
        .await
        .map_err(|e| match e {
            CredentialError::InvalidCredentials => {
                warn!("login refused: {}", e);
                LoginError::InvalidCredentials
            }
            CredentialError::UnexpectedError(_) => {
                error!("login failed: {}", e);
                LoginError::InternalServerError
            }
        })?;

    let issued = state.token_service.issue(&identity).map_err(|e| {
        error!("failed to issue token for identity {}: {}", identity.id, e);
        LoginError::InternalServerError
    })?;

    info!(
        "issued token for identity {} expiring at {}",
        identity.id, issued.expires_at
    );

    Ok((
        StatusCode::OK,
        Json(LoginResponse {
            token: issued.token,
        }),
    ))
}
