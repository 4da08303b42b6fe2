//! Repository for the `projects` table.

use folio_core::types::{new_db_id, DbId};
use sqlx::PgPool;

use crate::models::project::{NewProject, Project, ProjectChanges, ProjectFilter};

/// Unique constraint on `projects.title`; its violation is the authoritative
/// duplicate-title signal.
pub const TITLE_UNIQUE_CONSTRAINT: &str = "uq_projects_title";

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "id, title, description, tags, category, status, \
     image_url, code_url, live_url, likes_count, views_count, visibility, \
     start_date, end_date, is_archived, created_at, updated_at";

/// Provides CRUD and counter operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project with zeroed counters, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects
                (id, title, description, tags, category, status, image_url, code_url,
                 live_url, visibility, start_date, end_date, is_archived)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(new_db_id())
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.tags)
            .bind(&input.category)
            .bind(&input.status)
            .bind(&input.image_url)
            .bind(&input.code_url)
            .bind(&input.live_url)
            .bind(&input.visibility)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.is_archived)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a project by exact, case-sensitive title.
    pub async fn find_by_title(pool: &PgPool, title: &str) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE title = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(title)
            .fetch_optional(pool)
            .await
    }

    /// List projects, most recently created first.
    ///
    /// With an empty filter this is the full set. `search` matches title and
    /// description through the full-text index, or any tag exactly
    /// (case-insensitive).
    pub async fn list(pool: &PgPool, filter: &ProjectFilter) -> Result<Vec<Project>, sqlx::Error> {
        let search = filter
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE ($1::text IS NULL
                    OR to_tsvector('simple', title || ' ' || description)
                       @@ plainto_tsquery('simple', $1)
                    OR EXISTS (SELECT 1 FROM unnest(tags) AS t WHERE lower(t) = lower($1)))
               AND ($2::text IS NULL OR category = $2)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(search)
            .bind(filter.category.as_deref())
            .fetch_all(pool)
            .await
    }

    /// List projects with the given status, most recently created first.
    pub async fn list_by_status(pool: &PgPool, status: &str) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects WHERE status = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// Apply a partial update. Only `Some` fields in `changes` are written.
    ///
    /// Link fields set to `Some(None)` are cleared. Returns `None` if no row
    /// with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        changes: &ProjectChanges,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                tags = COALESCE($4, tags),
                category = COALESCE($5, category),
                status = COALESCE($6, status),
                image_url = CASE WHEN $7 THEN $8 ELSE image_url END,
                code_url = CASE WHEN $9 THEN $10 ELSE code_url END,
                live_url = CASE WHEN $11 THEN $12 ELSE live_url END,
                visibility = COALESCE($13, visibility),
                start_date = COALESCE($14, start_date),
                end_date = COALESCE($15, end_date),
                is_archived = COALESCE($16, is_archived),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&changes.title)
            .bind(&changes.description)
            .bind(&changes.tags)
            .bind(&changes.category)
            .bind(&changes.status)
            .bind(changes.image_url.is_some())
            .bind(changes.image_url.clone().flatten())
            .bind(changes.code_url.is_some())
            .bind(changes.code_url.clone().flatten())
            .bind(changes.live_url.is_some())
            .bind(changes.live_url.clone().flatten())
            .bind(&changes.visibility)
            .bind(changes.start_date)
            .bind(changes.end_date)
            .bind(changes.is_archived)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a project. Returns `true` if a row was removed.
    ///
    /// Ledger rows for the project are left in place.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Atomically add one view. Returns the new count, or `None` if the
    /// project does not exist.
    pub async fn increment_views(pool: &PgPool, id: DbId) -> Result<Option<i64>, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "UPDATE projects SET views_count = views_count + 1, updated_at = NOW()
             WHERE id = $1
             RETURNING views_count",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
