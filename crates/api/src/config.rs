use std::str::FromStr;
use std::time::Duration;

use axum::http::HeaderValue;
use folio_core::engagement::LIKE_COOLDOWN_SECS;
use folio_core::rate_limit::{RateLimit, DEFAULT_ADMIN_MAX_ATTEMPTS, DEFAULT_ADMIN_WINDOW_SECS};

/// Errors raised while loading [`ServerConfig`] from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value '{value}'")]
    Invalid { name: &'static str, value: String },
}

/// Which origins the CORS layer accepts.
#[derive(Debug, Clone)]
pub enum CorsOrigins {
    /// `*`: any origin, without credentials.
    Any,
    List(Vec<HeaderValue>),
}

/// Paths handed to the static dashboard by `GET /config`.
#[derive(Debug, Clone)]
pub struct ClientUrls {
    pub api_url: String,
    pub verify_url: String,
}

/// Server configuration loaded from environment variables.
///
/// All fields except the admin secret hash have defaults suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Version segment of the API prefix, as in `/api/{version}` (default: `v1`).
    pub api_version: String,
    pub client_urls: ClientUrls,
    pub cors_origins: CorsOrigins,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Argon2 PHC hash of the shared admin secret.
    pub admin_secret_hash: String,
    pub admin_rate_limit: RateLimit,
    pub like_cooldown_secs: i64,
    /// Ledger rows idle longer than this are pruned (default: `24`).
    pub like_history_retention_hours: i64,
    /// Take the caller's origin from `X-Forwarded-For` when set.
    pub trust_proxy: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                          | Default                   |
    /// |----------------------------------|---------------------------|
    /// | `HOST`                           | `0.0.0.0`                 |
    /// | `PORT`                           | `3000`                    |
    /// | `API_VERSION`                    | `v1`                      |
    /// | `API_URL`                        | `/api/v1/projects`        |
    /// | `VERIFY_URL`                     | `/api/v1/verify-admin`    |
    /// | `CORS_ORIGINS`                   | `*`                       |
    /// | `REQUEST_TIMEOUT_SECS`           | `30`                      |
    /// | `ADMIN_SECRET_HASH`              | required                  |
    /// | `ADMIN_RATE_LIMIT_MAX`           | `10`                      |
    /// | `ADMIN_RATE_LIMIT_WINDOW_SECS`   | `60`                      |
    /// | `LIKE_COOLDOWN_SECS`             | `10`                      |
    /// | `LIKE_HISTORY_RETENTION_HOURS`   | `24`                      |
    /// | `TRUST_PROXY`                    | `false`                   |
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env_or("HOST", "0.0.0.0");
        let port = parse_env("PORT", 3000u16)?;
        let api_version = env_or("API_VERSION", "v1");

        let client_urls = ClientUrls {
            api_url: env_or("API_URL", &format!("/api/{api_version}/projects")),
            verify_url: env_or("VERIFY_URL", &format!("/api/{api_version}/verify-admin")),
        };

        let cors_origins = parse_cors_origins(&env_or("CORS_ORIGINS", "*"))?;
        let request_timeout_secs = parse_env("REQUEST_TIMEOUT_SECS", 30u64)?;

        let admin_secret_hash =
            std::env::var("ADMIN_SECRET_HASH").map_err(|_| ConfigError::Missing("ADMIN_SECRET_HASH"))?;

        let admin_rate_limit = RateLimit {
            max_attempts: parse_env("ADMIN_RATE_LIMIT_MAX", DEFAULT_ADMIN_MAX_ATTEMPTS)?,
            window: Duration::from_secs(parse_env(
                "ADMIN_RATE_LIMIT_WINDOW_SECS",
                DEFAULT_ADMIN_WINDOW_SECS,
            )?),
        };

        let like_cooldown_secs = parse_env("LIKE_COOLDOWN_SECS", LIKE_COOLDOWN_SECS)?;
        let like_history_retention_hours = parse_env("LIKE_HISTORY_RETENTION_HOURS", 24i64)?;
        let trust_proxy = parse_env("TRUST_PROXY", false)?;

        Ok(Self {
            host,
            port,
            api_version,
            client_urls,
            cors_origins,
            request_timeout_secs,
            admin_secret_hash,
            admin_rate_limit,
            like_cooldown_secs,
            like_history_retention_hours,
            trust_proxy,
        })
    }

    /// Prefix under which all API routes are mounted, e.g. `/api/v1`.
    pub fn api_prefix(&self) -> String {
        format!("/api/{}", self.api_version)
    }

    pub fn like_cooldown(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.like_cooldown_secs)
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(default),
    }
}

/// Parse a comma-separated origin list. A lone `*` allows any origin.
pub fn parse_cors_origins(raw: &str) -> Result<CorsOrigins, ConfigError> {
    let entries: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if entries.is_empty() || entries.contains(&"*") {
        return Ok(CorsOrigins::Any);
    }

    entries
        .into_iter()
        .map(|o| {
            o.parse::<HeaderValue>().map_err(|_| ConfigError::Invalid {
                name: "CORS_ORIGINS",
                value: o.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CorsOrigins::List)
}
