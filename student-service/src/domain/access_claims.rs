use serde::{Deserialize, Serialize};

use super::Identity;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    pub id: i64,          // Identity id
    pub username: String, // Identity username
    pub exp: i64,         // Expiration time
    pub iat: i64,         // Issued at time
    pub jti: String,      // JWT ID
}

impl AccessClaims {
    pub fn identity(&self) -> Identity {
        Identity::new(self.id, self.username.clone())
    }
}
