/// Home summary endpoint
///
/// Approximates the tool's Home page: the most recently touched projects and
/// the tasks assigned to the synthetic current user `"me"`.
///
/// # Endpoint
///
/// ```text
/// GET {prefix}/home
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "my_tasks": [
///     { "id": 3, "name": "Write launch notes", "project_id": 1,
///       "project_name": "My Project", "status": "today" }
///   ],
///   "recent_projects": [
///     { "id": 1, "name": "My Project", "color": "#3a258e", "icon": "list" }
///   ]
/// }
/// ```

use crate::{app::AppState, error::ApiResult};
use axum::{extract::State, Json};
use taskhome_shared::home::{get_home_summary, HomeSummary, CURRENT_USER};

/// Home summary handler
///
/// Has no error conditions of its own; an empty store yields empty lists.
pub async fn get_home(State(state): State<AppState>) -> ApiResult<Json<HomeSummary>> {
    let summary = get_home_summary(&state.db, CURRENT_USER).await?;
    Ok(Json(summary))
}
