use thiserror::Error;

use super::{Identity, LoginRequestBody};

#[derive(Error, Debug, PartialEq)]
pub enum CredentialError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("credential check failed: {0}")]
    UnexpectedError(String),
}

// Decides which identity a login request is issued a token for.
#[async_trait::async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(
        &self,
        credentials: Option<LoginRequestBody>,
    ) -> Result<Identity, CredentialError>;
}
