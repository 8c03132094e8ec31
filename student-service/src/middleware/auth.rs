use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::headers::{authorization::Bearer, Authorization};
use axum_extra::typed_header::{TypedHeaderRejection, TypedHeaderRejectionReason};
use axum_extra::TypedHeader;
use log::warn;

use crate::app_state::AppState;
use crate::errors::AuthError;

/// Gate in front of every student route.
///
/// Pulls the bearer token from `Authorization`, verifies it, and stores the
/// decoded `Identity` in the request extensions for the handler. Any failure
/// ends the request here with a 403.
pub async fn require_auth(
    State(state): State<AppState>,
    bearer: Result<TypedHeader<Authorization<Bearer>>, TypedHeaderRejection>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let TypedHeader(Authorization(bearer)) = bearer.map_err(|rejection| {
        let err = if matches!(rejection.reason(), TypedHeaderRejectionReason::Missing) {
            AuthError::NoCredential
        } else {
            AuthError::InvalidCredential
        };
        warn!(
            "rejected {} {}: {} ({})",
            request.method(),
            request.uri().path(),
            err,
            rejection
        );
        err
    })?;

    let claims = state.token_service.validate(bearer.token()).map_err(|e| {
        warn!(
            "rejected {} {}: {} ({})",
            request.method(),
            request.uri().path(),
            AuthError::InvalidCredential,
            e
        );
        AuthError::InvalidCredential
    })?;

    request.extensions_mut().insert(claims.identity());
    Ok(next.run(request).await)
}
