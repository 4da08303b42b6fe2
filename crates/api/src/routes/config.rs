use axum::routing::get;
use axum::Router;

use crate::handlers::config;
use crate::state::AppState;

/// `GET /config`.
pub fn router() -> Router<AppState> {
    Router::new().route("/config", get(config::client_config))
}
