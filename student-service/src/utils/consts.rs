pub mod env {
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";
    pub const TOKEN_TTL_SECONDS_ENV_VAR: &str = "TOKEN_TTL_SECONDS";
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const SERVER_ADDRESS_ENV_VAR: &str = "SERVER_ADDRESS";
    pub const RATE_LIMIT_MAX_REQUESTS_ENV_VAR: &str = "RATE_LIMIT_MAX_REQUESTS";
    pub const RATE_LIMIT_WINDOW_SECONDS_ENV_VAR: &str = "RATE_LIMIT_WINDOW_SECONDS";
}

pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 60 * 60;
pub const DEFAULT_DATABASE_URL: &str = "mysql://root@localhost/reactcrud";
pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8081";
pub const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 100;
pub const DEFAULT_RATE_LIMIT_WINDOW_SECONDS: u64 = 15 * 60;

// DATABASE_URL value that selects the in-memory student store.
pub const IN_MEMORY_DATABASE_URL: &str = "memory";

// Placeholder principal handed out by the stub login.
pub const STUB_IDENTITY_ID: i64 = 1;
pub const STUB_IDENTITY_USERNAME: &str = "exampleUser";
