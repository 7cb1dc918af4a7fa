/// Task endpoints
///
/// Creation, lookup, and partial update of tasks.
///
/// # Endpoints
///
/// ```text
/// POST  {prefix}/tasks
/// GET   {prefix}/tasks/:id
/// PATCH {prefix}/tasks/:id
/// ```

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use taskhome_shared::models::project::Project;
use taskhome_shared::models::section::Section;
use taskhome_shared::models::task::{CreateTask, Task, UpdateTask};

/// Task response shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRead {
    pub id: i64,
    pub project_id: i64,
    pub section_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub assignee: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<String>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl From<Task> for TaskRead {
    fn from(t: Task) -> Self {
        Self {
            id: t.id,
            project_id: t.project_id,
            section_id: t.section_id,
            name: t.name,
            description: t.description,
            status: t.status,
            assignee: t.assignee,
            due_date: t.due_date,
            priority: t.priority,
            created_at: t.created_at,
            completed_at: t.completed_at,
        }
    }
}

/// `POST {prefix}/tasks`
///
/// Referential validation before the insert:
/// - 400 when `project_id` does not resolve
/// - 400 when `section_id` is supplied but does not resolve to a section of
///   that same project
pub async fn create_task(
    State(state): State<AppState>,
    Json(input): Json<CreateTask>,
) -> ApiResult<(StatusCode, Json<TaskRead>)> {
    if Project::find_by_id(&state.db, input.project_id)
        .await?
        .is_none()
    {
        return Err(ApiError::BadRequest("Invalid project_id".to_string()));
    }

    if let Some(section_id) = input.section_id {
        let section = Section::find_by_id(&state.db, section_id).await?;
        match section {
            Some(section) if section.project_id == input.project_id => {}
            _ => return Err(ApiError::BadRequest("Invalid section_id".to_string())),
        }
    }

    let task = Task::create(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(task.into())))
}

/// `GET {prefix}/tasks/:id`
pub async fn get_task(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
) -> ApiResult<Json<TaskRead>> {
    let task = Task::find_by_id(&state.db, task_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))?;
    Ok(Json(task.into()))
}

/// `PATCH {prefix}/tasks/:id`
///
/// Applies only the fields present in the body; omitted fields keep their
/// prior values, and an explicit `null` clears a nullable field. 404 when
/// the task does not exist.
pub async fn update_task(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
    Json(patch): Json<UpdateTask>,
) -> ApiResult<Json<TaskRead>> {
    let task = Task::update(&state.db, task_id, patch)
        .await?
        .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))?;
    Ok(Json(task.into()))
}
