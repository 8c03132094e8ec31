/// Access token issuance and validation.
///
/// `TokenService` signs an `Identity` into a short-lived HS256 JWT and checks
/// presented tokens on every protected request.
///
/// Security model:
/// 1. Tokens are stateless. Nothing is stored on issuance and there is no
///    revocation list; a token is accepted until it expires.
/// 2. A token is valid only if its signature verifies against the configured
///    secret and the current time is strictly before its `exp` claim. No
///    leeway is applied.
/// 3. Each token carries a random `jti`, so two tokens issued to the same
///    identity within the same second still differ.
///
/// Errors:
/// - Issuance maps signing and clock-arithmetic failures to `TokenError`.
/// - Validation distinguishes expired tokens from every other failure via
///   `AccessError`, for logging only.
use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{AccessClaims, Identity, IssuedToken};
use crate::utils::config::Config;

#[derive(Clone)]
pub struct TokenService {
    cfg: Arc<Config>,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("token ttl out of range")]
    InvalidTtl,
    #[error("failed to sign token: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

#[derive(Error, Debug)]
pub enum AccessError {
    #[error("token expired")]
    Expired,
    #[error("invalid token: {0:?}")]
    InvalidToken(ErrorKind),
}

impl TokenService {
    pub fn new(cfg: Arc<Config>) -> Self {
        let secret = cfg.jwt_secret().as_bytes();
        let encoding_key = EncodingKey::from_secret(secret);
        let decoding_key = DecodingKey::from_secret(secret);
        Self {
            cfg,
            encoding_key,
            decoding_key,
        }
    }

    /// Sign `{id, username, exp, iat, jti}` for the given identity.
    ///
    /// Performs no credential checks: whoever calls this has already decided
    /// the caller is `identity`.
    pub fn issue(&self, identity: &Identity) -> Result<IssuedToken, TokenError> {
        let now = Utc::now();
        let ttl = Duration::try_seconds(self.cfg.token_ttl_seconds())
            .ok_or(TokenError::InvalidTtl)?;
        let exp = now.checked_add_signed(ttl).ok_or(TokenError::InvalidTtl)?;

        let claims = AccessClaims {
            id: identity.id,
            username: identity.username.clone(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;

        Ok(IssuedToken {
            token,
            expires_at: claims.exp,
        })
    }

    /// Validate signature and expiry, returning the embedded claims.
    pub fn validate(&self, token: &str) -> Result<AccessClaims, AccessError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = decode::<AccessClaims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.into_kind() {
                ErrorKind::ExpiredSignature => AccessError::Expired,
                kind => AccessError::InvalidToken(kind),
            }
        })?;

        // jsonwebtoken accepts exp == now; the token must expire strictly after.
        if data.claims.exp <= Utc::now().timestamp() {
            return Err(AccessError::Expired);
        }

        Ok(data.claims)
    }
}
