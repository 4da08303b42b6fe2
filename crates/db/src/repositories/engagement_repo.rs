//! Like/dislike counter updates guarded by the per-origin cooldown.

use chrono::Duration;
use folio_core::engagement::{cooldown_remaining, retry_after_secs, LikeAction};
use folio_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::like_history::LikeOutcome;
use crate::models::project::Project;
use crate::repositories::project_repo::COLUMNS;

/// Operations that touch both `projects` and `like_history`.
pub struct EngagementRepo;

impl EngagementRepo {
    /// Apply a like or dislike from `origin` unless its cooldown is active.
    ///
    /// Runs in one transaction:
    ///
    /// 1. Lock the project row (`FOR UPDATE`); absent → `ProjectNotFound`.
    /// 2. Upsert the ledger row, but only overwrite an existing row whose
    ///    `last_action_at` is at least `cooldown` old. No row returned means
    ///    the cooldown is active and the transaction is rolled back.
    /// 3. Adjust `likes_count`, floored at zero.
    ///
    /// The row lock serialises concurrent actions on the same project, so a
    /// second request from the same origin always observes the first one's
    /// ledger write and cannot double-count.
    pub async fn apply_like_action(
        pool: &PgPool,
        project_id: DbId,
        origin: &str,
        action: LikeAction,
        cooldown: Duration,
    ) -> Result<LikeOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let locked = sqlx::query_scalar::<_, DbId>("SELECT id FROM projects WHERE id = $1 FOR UPDATE")
            .bind(project_id)
            .fetch_optional(&mut *tx)
            .await?;
        if locked.is_none() {
            tx.rollback().await?;
            return Ok(LikeOutcome::ProjectNotFound);
        }

        let cooldown_secs = cooldown.num_milliseconds() as f64 / 1000.0;
        let recorded = sqlx::query_scalar::<_, i64>(
            "INSERT INTO like_history (project_id, origin, last_action_at)
             VALUES ($1, $2, NOW())
             ON CONFLICT (project_id, origin) DO UPDATE
                SET last_action_at = EXCLUDED.last_action_at
                WHERE like_history.last_action_at
                      <= EXCLUDED.last_action_at - ($3::float8 * INTERVAL '1 second')
             RETURNING id",
        )
        .bind(project_id)
        .bind(origin)
        .bind(cooldown_secs)
        .fetch_optional(&mut *tx)
        .await?;

        if recorded.is_none() {
            let (last_action_at, now) = sqlx::query_as::<_, (Timestamp, Timestamp)>(
                "SELECT last_action_at, NOW() FROM like_history
                 WHERE project_id = $1 AND origin = $2",
            )
            .bind(project_id)
            .bind(origin)
            .fetch_one(&mut *tx)
            .await?;
            tx.rollback().await?;

            let retry_after_secs = cooldown_remaining(last_action_at, now, cooldown)
                .map(retry_after_secs)
                .unwrap_or(1);
            tracing::debug!(%project_id, origin, retry_after_secs, "Like cooldown active");
            return Ok(LikeOutcome::CooldownActive { retry_after_secs });
        }

        let query = format!(
            "UPDATE projects SET
                likes_count = GREATEST(likes_count + $2, 0),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(project_id)
            .bind(action.delta())
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(LikeOutcome::Applied(project))
    }
}
