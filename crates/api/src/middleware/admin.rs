//! Admin secret extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use folio_core::error::CoreError;

use crate::auth::admin_secret::AdminDenial;
use crate::error::AppError;
use crate::state::AppState;

/// Header carrying the shared admin secret.
pub const ADMIN_HEADER: &str = "x-admin";

/// Requires a valid admin secret in the `x-admin` header.
///
/// Rejects with 401 when the header is missing and 403 when it does not
/// match.
///
/// ```ignore
/// async fn admin_only(_admin: RequireAdmin) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin;

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let submitted = parts
            .headers
            .get(ADMIN_HEADER)
            .and_then(|v| v.to_str().ok());

        match state.admin_gate.verify(submitted) {
            Ok(()) => Ok(RequireAdmin),
            Err(AdminDenial::Missing) => Err(AppError::Core(CoreError::Unauthorized(
                "Admin key missing".into(),
            ))),
            Err(AdminDenial::Mismatch) => {
                tracing::warn!(path = %parts.uri.path(), "Rejected invalid admin key");
                Err(AppError::Core(CoreError::Forbidden(
                    "Access denied: Invalid admin key".into(),
                )))
            }
            Err(AdminDenial::Hash(e)) => Err(AppError::InternalError(e.to_string())),
        }
    }
}
