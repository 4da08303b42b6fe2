//! Periodic cleanup of the like-history ledger.
//!
//! A ledger row older than the retention period can no longer block an
//! action, so deleting it is unobservable. This also collects rows left
//! behind by deleted projects. Expired admin rate-limit windows are dropped
//! on the same tick.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use folio_db::repositories::LikeHistoryRepo;
use sqlx::PgPool;
use tokio_util::sync::CancellationToken;

use crate::middleware::rate_limit::AdminRateLimiter;

/// How often the cleanup job runs.
const CLEANUP_INTERVAL: Duration = Duration::from_secs(3600);

/// Run the retention loop until `cancel` is triggered.
pub async fn run(
    pool: PgPool,
    limiter: Arc<AdminRateLimiter>,
    retention_hours: i64,
    cancel: CancellationToken,
) {
    tracing::info!(
        retention_hours,
        interval_secs = CLEANUP_INTERVAL.as_secs(),
        "Like history retention job started"
    );

    let mut interval = tokio::time::interval(CLEANUP_INTERVAL);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Like history retention job stopping");
                break;
            }
            _ = interval.tick() => {
                purge_once(&pool, &limiter, retention_hours).await;
            }
        }
    }
}

/// One cleanup pass. Failures are logged and retried on the next tick.
pub async fn purge_once(pool: &PgPool, limiter: &AdminRateLimiter, retention_hours: i64) {
    let cutoff = Utc::now() - chrono::Duration::hours(retention_hours);
    match LikeHistoryRepo::delete_older_than(pool, cutoff).await {
        Ok(deleted) if deleted > 0 => {
            tracing::info!(deleted, "Like history retention: purged old rows");
        }
        Ok(_) => tracing::debug!("Like history retention: no rows to purge"),
        Err(e) => {
            tracing::error!(error = %e, "Like history retention: cleanup failed");
        }
    }

    let pruned = limiter.prune(Instant::now()).await;
    if pruned > 0 {
        tracing::debug!(pruned, "Dropped expired admin rate-limit windows");
    }
}
