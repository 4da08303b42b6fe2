//! Repository for the `like_history` table.

use folio_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::like_history::LikeHistory;

const COLUMNS: &str = "id, project_id, origin, last_action_at, created_at";

/// Read and retention operations on the like-history ledger. Writes happen
/// inside [`EngagementRepo::apply_like_action`](super::EngagementRepo::apply_like_action).
pub struct LikeHistoryRepo;

impl LikeHistoryRepo {
    /// Find the ledger row for a (project, origin) pair.
    pub async fn find(
        pool: &PgPool,
        project_id: DbId,
        origin: &str,
    ) -> Result<Option<LikeHistory>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM like_history WHERE project_id = $1 AND origin = $2");
        sqlx::query_as::<_, LikeHistory>(&query)
            .bind(project_id)
            .bind(origin)
            .fetch_optional(pool)
            .await
    }

    /// Delete rows whose last action is older than `cutoff`, orphaned or not.
    /// Returns the number of rows removed.
    pub async fn delete_older_than(pool: &PgPool, cutoff: Timestamp) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM like_history WHERE last_action_at < $1")
            .bind(cutoff)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
