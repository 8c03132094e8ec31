use std::sync::Arc;
use std::time::Duration;

use crate::domain::{CredentialVerifier, StudentStore};
use crate::services::{FixedWindowRateLimiter, TokenService};
use crate::utils::Config;

// Using type aliases to improve readability!
pub type StudentStoreType = Arc<dyn StudentStore>;
pub type CredentialVerifierType = Arc<dyn CredentialVerifier>;
pub type TokenServiceType = Arc<TokenService>;
pub type RateLimiterType = Arc<FixedWindowRateLimiter>;
pub type ConfigType = Arc<Config>;

#[derive(Clone)]
pub struct AppState {
    pub config: ConfigType,
    pub student_store: StudentStoreType,
    pub credential_verifier: CredentialVerifierType,
    pub token_service: TokenServiceType,
    pub rate_limiter: RateLimiterType,
}

impl AppState {
    pub fn new(
        config: ConfigType,
        student_store: StudentStoreType,
        credential_verifier: CredentialVerifierType,
    ) -> Self {
        let token_service = Arc::new(TokenService::new(config.clone()));
        let rate_limiter = Arc::new(FixedWindowRateLimiter::new(
            config.rate_limit_max_requests(),
            Duration::from_secs(config.rate_limit_window_seconds()),
        ));

        Self {
            config,
            student_store,
            credential_verifier,
            token_service,
            rate_limiter,
        }
    }
}
