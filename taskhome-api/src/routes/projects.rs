/// Project endpoints
///
/// Listing/creation of projects plus the project sub-resources (sections and
/// tasks). Handlers stay thin: decode parameters, call one model operation,
/// map the result into a response shape.
///
/// # Endpoints
///
/// ```text
/// GET  {prefix}/projects                 ?workspace_id
/// POST {prefix}/projects
/// GET  {prefix}/projects/:id
/// GET  {prefix}/projects/:id/sections
/// GET  {prefix}/projects/:id/tasks       ?status&assignee
/// ```

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::tasks::TaskRead,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use taskhome_shared::models::project::{CreateProject, Project};
use taskhome_shared::models::section::Section;
use taskhome_shared::models::task::{Task, TaskFilter};
use taskhome_shared::models::workspace::Workspace;

/// Longest accepted `status` query value
const MAX_STATUS_FILTER_LEN: usize = 64;

/// Project response shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRead {
    pub id: i64,
    pub workspace_id: i64,
    pub name: String,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Project> for ProjectRead {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            workspace_id: p.workspace_id,
            name: p.name,
            color: p.color,
            icon: p.icon,
            is_archived: p.is_archived,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// Section response shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionRead {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub order_index: i64,
}

impl From<Section> for SectionRead {
    fn from(s: Section) -> Self {
        Self {
            id: s.id,
            project_id: s.project_id,
            name: s.name,
            order_index: s.order_index,
        }
    }
}

/// Query parameters for project listing
#[derive(Debug, Deserialize)]
pub struct ListProjectsQuery {
    /// Filter by workspace id
    pub workspace_id: Option<i64>,
}

/// Query parameters for a project's task listing
#[derive(Debug, Deserialize)]
pub struct ProjectTasksQuery {
    /// Optional status filter (e.g. inbox, today, completed)
    pub status: Option<String>,

    /// Optional assignee identifier
    pub assignee: Option<String>,
}

/// `GET {prefix}/projects`
///
/// Ordered most-recently-touched first.
pub async fn list_projects(
    State(state): State<AppState>,
    Query(params): Query<ListProjectsQuery>,
) -> ApiResult<Json<Vec<ProjectRead>>> {
    let projects = Project::list(&state.db, params.workspace_id).await?;
    Ok(Json(projects.into_iter().map(ProjectRead::from).collect()))
}

/// `POST {prefix}/projects`
///
/// Fails with 400 when `workspace_id` does not resolve to an existing
/// workspace.
pub async fn create_project(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> ApiResult<(StatusCode, Json<ProjectRead>)> {
    if Workspace::find_by_id(&state.db, input.workspace_id)
        .await?
        .is_none()
    {
        return Err(ApiError::BadRequest("Invalid workspace_id".to_string()));
    }

    let project = Project::create(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(project.into())))
}

/// `GET {prefix}/projects/:id`
pub async fn get_project(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
) -> ApiResult<Json<ProjectRead>> {
    let project = Project::find_by_id(&state.db, project_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Project not found".to_string()))?;
    Ok(Json(project.into()))
}

/// `GET {prefix}/projects/:id/sections`
///
/// Ordered by `order_index` ascending. 404 when the project does not exist.
pub async fn get_project_sections(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
) -> ApiResult<Json<Vec<SectionRead>>> {
    Project::find_by_id(&state.db, project_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Project not found".to_string()))?;

    let sections = Section::list_for_project(&state.db, project_id).await?;
    Ok(Json(sections.into_iter().map(SectionRead::from).collect()))
}

/// `GET {prefix}/projects/:id/tasks`
///
/// 404 when the project does not exist; 422 when the `status` filter exceeds
/// 64 characters. Any other filter string (including empty) is accepted and
/// matched by exact equality.
pub async fn get_project_tasks(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
    Query(params): Query<ProjectTasksQuery>,
) -> ApiResult<Json<Vec<TaskRead>>> {
    Project::find_by_id(&state.db, project_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Project not found".to_string()))?;

    if let Some(status) = &params.status {
        // Character count, not byte length: multi-byte statuses up to 64
        // characters are accepted.
        if status.chars().count() > MAX_STATUS_FILTER_LEN {
            return Err(ApiError::UnprocessableEntity("status too long".to_string()));
        }
    }

    let tasks = Task::list(
        &state.db,
        TaskFilter {
            project_id: Some(project_id),
            assignee: params.assignee,
            status: params.status,
        },
    )
    .await?;
    Ok(Json(tasks.into_iter().map(TaskRead::from).collect()))
}
