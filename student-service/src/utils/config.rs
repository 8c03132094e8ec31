use std::env;

use dotenvy::dotenv;
use thiserror::Error;

use super::consts::{
    env::{
        DATABASE_URL_ENV_VAR, JWT_SECRET_ENV_VAR, RATE_LIMIT_MAX_REQUESTS_ENV_VAR,
        RATE_LIMIT_WINDOW_SECONDS_ENV_VAR, SERVER_ADDRESS_ENV_VAR, TOKEN_TTL_SECONDS_ENV_VAR,
    },
    DEFAULT_DATABASE_URL, DEFAULT_RATE_LIMIT_MAX_REQUESTS, DEFAULT_RATE_LIMIT_WINDOW_SECONDS,
    DEFAULT_SERVER_ADDRESS, DEFAULT_TOKEN_TTL_SECONDS,
};

/// Process-wide settings, loaded once at startup and shared read-only.
#[derive(Clone)]
pub struct Config {
    jwt_secret: String,
    token_ttl_seconds: i64,
    database_url: String,
    server_address: String,
    rate_limit_max_requests: u32,
    rate_limit_window_seconds: u64,
}

impl Config {
    /// Config with the given signing secret and defaults for everything else.
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_ttl_seconds: DEFAULT_TOKEN_TTL_SECONDS,
            database_url: DEFAULT_DATABASE_URL.to_owned(),
            server_address: DEFAULT_SERVER_ADDRESS.to_owned(),
            rate_limit_max_requests: DEFAULT_RATE_LIMIT_MAX_REQUESTS,
            rate_limit_window_seconds: DEFAULT_RATE_LIMIT_WINDOW_SECONDS,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env in dev; no-op in prod if not present.
        let _ = dotenv();

        let jwt_secret = req_var(JWT_SECRET_ENV_VAR)?;
        if jwt_secret.is_empty() {
            return Err(ConfigError::Invalid(JWT_SECRET_ENV_VAR));
        }

        let mut config = Self::new(jwt_secret);
        if let Some(ttl) = parse_opt(TOKEN_TTL_SECONDS_ENV_VAR)? {
            config.token_ttl_seconds = ttl;
        }
        if let Some(url) = opt_var(DATABASE_URL_ENV_VAR) {
            config.database_url = url;
        }
        if let Some(address) = opt_var(SERVER_ADDRESS_ENV_VAR) {
            config.server_address = address;
        }
        if let Some(max) = parse_opt(RATE_LIMIT_MAX_REQUESTS_ENV_VAR)? {
            config.rate_limit_max_requests = max;
        }
        if let Some(window) = parse_opt(RATE_LIMIT_WINDOW_SECONDS_ENV_VAR)? {
            if window == 0 {
                return Err(ConfigError::Invalid(RATE_LIMIT_WINDOW_SECONDS_ENV_VAR));
            }
            config.rate_limit_window_seconds = window;
        }

        Ok(config)
    }

    pub fn with_token_ttl_seconds(mut self, ttl: i64) -> Self {
        self.token_ttl_seconds = ttl;
        self
    }

    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = url.into();
        self
    }

    pub fn with_rate_limit(mut self, max_requests: u32, window_seconds: u64) -> Self {
        self.rate_limit_max_requests = max_requests;
        self.rate_limit_window_seconds = window_seconds;
        self
    }

    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }
    pub fn token_ttl_seconds(&self) -> i64 {
        self.token_ttl_seconds
    }
    pub fn database_url(&self) -> &str {
        &self.database_url
    }
    pub fn server_address(&self) -> &str {
        &self.server_address
    }
    pub fn rate_limit_max_requests(&self) -> u32 {
        self.rate_limit_max_requests
    }
    pub fn rate_limit_window_seconds(&self) -> u64 {
        self.rate_limit_window_seconds
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("missing env var {0}")]
    Missing(&'static str),
    #[error("invalid env var {0}")]
    Invalid(&'static str),
}

fn req_var(key: &'static str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::Missing(key))
}

fn opt_var(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn parse_opt<T: std::str::FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    opt_var(key)
        .map(|v| v.trim().parse::<T>().map_err(|_| ConfigError::Invalid(key)))
        .transpose()
}
