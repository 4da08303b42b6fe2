pub mod admin;
pub mod config;
pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/{version}` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                      list (public), create (admin, rate limited)
/// /projects/completed            list completed (public)
/// /projects/{id}                 get (public), update (admin, rate limited), delete (admin)
/// /projects/{id}/like            like / dislike (public, per-origin cooldown)
/// /projects/{id}/view            increment view counter (public)
///
/// /verify-admin                  check an admin key (rate limited)
/// /config                        dashboard endpoint paths (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .merge(admin::router())
        .merge(config::router())
}
