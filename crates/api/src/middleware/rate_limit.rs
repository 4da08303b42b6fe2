//! Per-origin fixed-window limiter for admin authentication attempts.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use folio_core::rate_limit::{FixedWindow, RateLimit, WindowDecision};
use tokio::sync::Mutex;

use super::origin::ClientOrigin;
use crate::error::AppError;
use crate::state::AppState;

/// In-memory attempt counter keyed by caller origin.
///
/// Held in [`AppState`] behind an `Arc` so tests can construct their own
/// limit and reset it between scenarios.
pub struct AdminRateLimiter {
    limit: RateLimit,
    windows: Mutex<HashMap<String, FixedWindow>>,
}

impl AdminRateLimiter {
    pub fn new(limit: RateLimit) -> Self {
        Self {
            limit,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Record one attempt from `origin` now.
    pub async fn check(&self, origin: &str) -> WindowDecision {
        self.check_at(origin, Instant::now()).await
    }

    pub async fn check_at(&self, origin: &str, now: Instant) -> WindowDecision {
        let mut windows = self.windows.lock().await;
        windows
            .entry(origin.to_string())
            .or_insert_with(|| FixedWindow::new(now))
            .record(now, self.limit)
    }

    /// Drop windows that have elapsed. Returns how many were removed.
    pub async fn prune(&self, now: Instant) -> usize {
        let mut windows = self.windows.lock().await;
        let before = windows.len();
        windows.retain(|_, w| !w.is_expired(now, self.limit.window));
        before - windows.len()
    }

    /// Forget every origin.
    pub async fn reset(&self) {
        self.windows.lock().await.clear();
    }

    pub async fn tracked_origins(&self) -> usize {
        self.windows.lock().await.len()
    }
}

/// Counts an admin attempt for the caller's origin and rejects with 429 once
/// the window's allowance is spent.
///
/// Place it before [`RequireAdmin`](super::admin::RequireAdmin) so failed
/// secrets are counted too.
pub struct AdminRateLimit;

impl FromRequestParts<AppState> for AdminRateLimit {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let origin = match ClientOrigin::from_request_parts(parts, state).await {
            Ok(ClientOrigin(origin)) => origin,
            Err(never) => match never {},
        };

        match state.admin_limiter.check(&origin).await {
            WindowDecision::Allowed { .. } => Ok(AdminRateLimit),
            WindowDecision::Limited { retry_after } => {
                let retry_after_secs = ceil_secs(retry_after);
                tracing::warn!(origin = %origin, retry_after_secs, "Admin rate limit exceeded");
                Err(AppError::RateLimited { retry_after_secs })
            }
        }
    }
}

fn ceil_secs(d: Duration) -> u64 {
    let secs = d.as_secs() + u64::from(d.subsec_nanos() > 0);
    secs.max(1)
}
