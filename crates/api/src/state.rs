use std::sync::Arc;

use crate::auth::admin_secret::AdminGate;
use crate::config::ServerConfig;
use crate::middleware::rate_limit::AdminRateLimiter;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: folio_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Verifies the `x-admin` secret against the configured hash.
    pub admin_gate: Arc<AdminGate>,
    /// Per-origin attempt counter in front of the admin gate.
    pub admin_limiter: Arc<AdminRateLimiter>,
}
