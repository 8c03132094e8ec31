use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LoginRequestBody {
    pub username: String,
    pub password: String,
}
