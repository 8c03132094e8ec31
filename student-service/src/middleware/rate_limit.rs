use std::net::SocketAddr;

use axum::extract::{ConnectInfo, Request, State};
use axum::http::{HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use log::warn;

use crate::app_state::AppState;
use crate::errors::RateLimitError;
use crate::services::RateDecision;

// Bucket shared by callers whose address is unknown.
const UNKNOWN_CALLER: &str = "unknown";

const X_RATELIMIT_LIMIT: HeaderName = HeaderName::from_static("x-ratelimit-limit");
const X_RATELIMIT_REMAINING: HeaderName = HeaderName::from_static("x-ratelimit-remaining");

pub async fn rate_limit(
    State(state): State<AppState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    request: Request,
    next: Next,
) -> Result<Response, RateLimitError> {
    let caller = connect_info
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_CALLER.to_owned());

    match state.rate_limiter.check(&caller).await {
        RateDecision::Allowed { remaining } => {
            let mut response = next.run(request).await;
            let headers = response.headers_mut();
            headers.insert(
                X_RATELIMIT_LIMIT,
                HeaderValue::from(state.rate_limiter.max_requests()),
            );
            headers.insert(X_RATELIMIT_REMAINING, HeaderValue::from(remaining));
            Ok(response)
        }
        RateDecision::Limited { retry_after } => {
            warn!("rate limit exceeded for {}", caller);
            // Round up so clients never retry inside the window.
            let retry_after_secs =
                retry_after.as_secs() + u64::from(retry_after.subsec_nanos() > 0);
            Err(RateLimitError::TooManyRequests { retry_after_secs })
        }
    }
}
