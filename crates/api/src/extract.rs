//! Request extractors whose rejections flow through [`AppError`].

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON body extractor that reports malformed or mistyped bodies as a
/// `BAD_REQUEST` error in the standard envelope instead of axum's plain-text
/// rejection.
///
/// ```ignore
/// async fn create(AppJson(input): AppJson<CreateProject>) -> AppResult<...> { ... }
/// ```
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Query-string extractor with the same envelope for bad or repeated
/// parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);
