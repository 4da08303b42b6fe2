use axum::routing::post;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// `POST /verify-admin`.
pub fn router() -> Router<AppState> {
    Router::new().route("/verify-admin", post(admin::verify_admin))
}
