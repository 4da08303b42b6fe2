//! Client configuration for the static dashboard.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Endpoint paths the dashboard script should call.
#[derive(Debug, Serialize)]
pub struct ClientConfig {
    #[serde(rename = "API_URL")]
    pub api_url: String,
    #[serde(rename = "VERIFY_URL")]
    pub verify_url: String,
}

/// GET /api/v1/config
pub async fn client_config(State(state): State<AppState>) -> Json<ClientConfig> {
    Json(ClientConfig {
        api_url: state.config.client_urls.api_url.clone(),
        verify_url: state.config.client_urls.verify_url.clone(),
    })
}
