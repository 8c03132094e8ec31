use crate::domain::{CredentialError, CredentialVerifier, Identity, LoginRequestBody};
use crate::utils::{STUB_IDENTITY_ID, STUB_IDENTITY_USERNAME};

/// Accepts every login and returns the same placeholder identity.
///
/// There is no credential store behind this service. A deployment that needs
/// real authentication must supply its own `CredentialVerifier`.
#[derive(Debug, Clone)]
pub struct StubCredentialVerifier {
    identity: Identity,
}

impl Default for StubCredentialVerifier {
    fn default() -> Self {
        Self {
            identity: Identity::new(STUB_IDENTITY_ID, STUB_IDENTITY_USERNAME),
        }
    }
}

#[async_trait::async_trait]
impl CredentialVerifier for StubCredentialVerifier {
    async fn verify(
        &self,
        _credentials: Option<LoginRequestBody>,
    ) -> Result<Identity, CredentialError> {
        Ok(self.identity.clone())
    }
}
