//! Handler for the dashboard's admin key check.

use axum::extract::State;
use axum::Json;
use folio_core::error::CoreError;
use serde::Deserialize;

use crate::auth::admin_secret::AdminDenial;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::rate_limit::AdminRateLimit;
use crate::response::MessageResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct VerifyAdminRequest {
    pub key: Option<String>,
}

/// POST /api/v1/verify-admin
///
/// Unlike the `x-admin` header check, a missing key here is a 400.
pub async fn verify_admin(
    _limit: AdminRateLimit,
    State(state): State<AppState>,
    AppJson(input): AppJson<VerifyAdminRequest>,
) -> AppResult<Json<MessageResponse>> {
    match state.admin_gate.verify(input.key.as_deref()) {
        Ok(()) => Ok(Json(MessageResponse::new("Verified"))),
        Err(AdminDenial::Missing) => Err(AppError::BadRequest("Admin key required".into())),
        Err(AdminDenial::Mismatch) => {
            tracing::warn!("Admin key verification failed");
            Err(AppError::Core(CoreError::Forbidden(
                "Invalid admin key".into(),
            )))
        }
        Err(AdminDenial::Hash(e)) => Err(AppError::InternalError(e.to_string())),
    }
}
