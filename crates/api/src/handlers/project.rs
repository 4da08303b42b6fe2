//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::engagement::LikeAction;
use folio_core::error::CoreError;
use folio_core::project::{statuses, validate_category};
use folio_core::types::{parse_db_id, DbId};
use folio_db::models::like_history::LikeOutcome;
use folio_db::models::project::{CreateProject, Project, ProjectFilter, UpdateProject};
use folio_db::repositories::{EngagementRepo, ProjectRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::middleware::admin::RequireAdmin;
use crate::middleware::origin::ClientOrigin;
use crate::middleware::rate_limit::AdminRateLimit;
use crate::response::{DataResponse, ListResponse, MessageDataResponse, MessageResponse};
use crate::state::AppState;

const ENTITY: &str = "Project";

/// Body of `PUT /projects/{id}/like`.
#[derive(Debug, Deserialize)]
pub struct LikeRequest {
    pub action: Option<String>,
}

/// A project as sent to clients: every column plus `_id`, the key older
/// frontends read the id from.
#[derive(Debug, Serialize)]
pub struct ProjectPayload {
    #[serde(rename = "_id")]
    pub legacy_id: DbId,
    #[serde(flatten)]
    pub project: Project,
}

impl From<Project> for ProjectPayload {
    fn from(project: Project) -> Self {
        Self {
            legacy_id: project.id,
            project,
        }
    }
}

fn payloads(projects: Vec<Project>) -> Vec<ProjectPayload> {
    projects.into_iter().map(ProjectPayload::from).collect()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    pub success: bool,
    pub message: String,
    pub likes_count: i64,
    pub data: ProjectPayload,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewResponse {
    pub success: bool,
    pub views_count: i64,
}

/// GET /api/v1/projects
pub async fn list(
    State(state): State<AppState>,
    AppQuery(filter): AppQuery<ProjectFilter>,
) -> AppResult<Json<ListResponse<ProjectPayload>>> {
    if let Some(category) = filter.category.as_deref() {
        validate_category(category).map_err(|e| AppError::Core(CoreError::Validation(e)))?;
    }
    let projects = ProjectRepo::list(&state.pool, &filter).await?;
    Ok(Json(ListResponse::new(payloads(projects))))
}

/// GET /api/v1/projects/completed
pub async fn list_completed(
    State(state): State<AppState>,
) -> AppResult<Json<ListResponse<ProjectPayload>>> {
    let projects = ProjectRepo::list_by_status(&state.pool, statuses::COMPLETED).await?;
    Ok(Json(ListResponse::new(payloads(projects))))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<DataResponse<ProjectPayload>>> {
    let id = parse_project_id(&raw_id)?;
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse::new(project.into())))
}

/// POST /api/v1/projects
pub async fn create(
    _limit: AdminRateLimit,
    _admin: RequireAdmin,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateProject>,
) -> AppResult<(StatusCode, Json<MessageDataResponse<ProjectPayload>>)> {
    let input = input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;

    // The unique constraint is authoritative; this only spares a failed insert.
    if ProjectRepo::find_by_title(&state.pool, &input.title)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::DuplicateTitle(
            "A project with this title already exists".into(),
        )));
    }

    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(project_id = %project.id, title = %project.title, "Project created");

    Ok((
        StatusCode::CREATED,
        Json(MessageDataResponse::new("Project created successfully", project.into())),
    ))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    _limit: AdminRateLimit,
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    AppJson(input): AppJson<UpdateProject>,
) -> AppResult<Json<MessageDataResponse<ProjectPayload>>> {
    let id = parse_project_id(&raw_id)?;
    let changes = input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e)))?;

    let project = ProjectRepo::update(&state.pool, id, &changes)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(project_id = %id, "Project updated");

    Ok(Json(MessageDataResponse::new(
        "Project updated successfully",
        project.into(),
    )))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_project_id(&raw_id)?;
    if !ProjectRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(project_id = %id, "Project deleted");
    Ok(Json(MessageResponse::new("Project deleted successfully")))
}

/// PUT /api/v1/projects/{id}/like
///
/// The action is checked before the id so a bad action is reported even for
/// a malformed id. A missing or unreadable body counts as a missing action.
pub async fn like(
    State(state): State<AppState>,
    ClientOrigin(origin): ClientOrigin,
    Path(raw_id): Path<String>,
    body: Result<AppJson<LikeRequest>, AppError>,
) -> AppResult<Json<LikeResponse>> {
    let action = body
        .ok()
        .and_then(|AppJson(input)| input.action)
        .as_deref()
        .and_then(LikeAction::parse)
        .ok_or_else(|| {
            AppError::Core(CoreError::InvalidAction(
                "Invalid action. Use \"like\" or \"dislike\".".into(),
            ))
        })?;
    let id = parse_project_id(&raw_id)?;

    let outcome = EngagementRepo::apply_like_action(
        &state.pool,
        id,
        &origin,
        action,
        state.config.like_cooldown(),
    )
    .await?;

    match outcome {
        LikeOutcome::Applied(project) => {
            tracing::debug!(
                project_id = %id,
                origin = %origin,
                action = action.as_str(),
                likes_count = project.likes_count,
                "Like action applied"
            );
            Ok(Json(LikeResponse {
                success: true,
                message: format!("Project {} successfully", action.past_tense()),
                likes_count: project.likes_count,
                data: project.into(),
            }))
        }
        LikeOutcome::CooldownActive { retry_after_secs } => Err(AppError::Core(
            CoreError::CooldownActive { retry_after_secs },
        )),
        LikeOutcome::ProjectNotFound => Err(not_found(id)),
    }
}

/// POST /api/v1/projects/{id}/view
pub async fn view(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<ViewResponse>> {
    let id = parse_project_id(&raw_id)?;
    let views_count = ProjectRepo::increment_views(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(ViewResponse {
        success: true,
        views_count,
    }))
}

fn parse_project_id(raw: &str) -> Result<DbId, AppError> {
    parse_db_id(raw).ok_or_else(|| {
        AppError::Core(CoreError::InvalidId {
            entity: ENTITY,
            raw: raw.to_string(),
        })
    })
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}
