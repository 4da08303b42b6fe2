//! Like-history ledger model and the outcome of a like/dislike attempt.

use folio_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::project::Project;

/// A row from the `like_history` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeHistory {
    pub id: i64,
    pub project_id: DbId,
    pub origin: String,
    pub last_action_at: Timestamp,
    pub created_at: Timestamp,
}

/// Result of [`EngagementRepo::apply_like_action`](crate::repositories::EngagementRepo::apply_like_action).
#[derive(Debug, Clone)]
pub enum LikeOutcome {
    /// The counter changed and the ledger row was recorded.
    Applied(Project),
    /// The origin acted on this project too recently; nothing changed.
    CooldownActive { retry_after_secs: u64 },
    /// No project with the given id exists.
    ProjectNotFound,
}
