/// Home summary aggregation
///
/// Builds the "home" view by composing two model queries and joining them in
/// memory: the most recently touched projects and the current user's newest
/// tasks, each truncated to a fixed size.
///
/// # Example
///
/// ```no_run
/// use taskhome_shared::home::{get_home_summary, CURRENT_USER};
/// use sqlx::SqlitePool;
///
/// # async fn example(pool: SqlitePool) -> Result<(), sqlx::Error> {
/// let summary = get_home_summary(&pool, CURRENT_USER).await?;
/// assert!(summary.recent_projects.len() <= 8);
/// assert!(summary.my_tasks.len() <= 20);
/// # Ok(())
/// # }
/// ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::models::project::Project;
use crate::models::task::{Task, TaskFilter};

/// Synthetic identifier for the current user
///
/// There is no authentication in this system; "my tasks" means tasks whose
/// assignee equals this literal.
pub const CURRENT_USER: &str = "me";

/// Maximum number of projects in the home view
pub const RECENT_PROJECT_LIMIT: usize = 8;

/// Maximum number of tasks in the home view
pub const MY_TASK_LIMIT: usize = 20;

/// Project card in the home view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeProjectSummary {
    pub id: i64,
    pub name: String,
    pub color: Option<String>,
    pub icon: Option<String>,
}

/// Task row in the home view, with its project name resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeTaskSummary {
    pub id: i64,
    pub name: String,
    pub project_id: i64,
    pub project_name: String,
    pub status: String,
}

/// Home view: the current user's tasks plus recently touched projects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeSummary {
    pub my_tasks: Vec<HomeTaskSummary>,
    pub recent_projects: Vec<HomeProjectSummary>,
}

/// Builds the home summary for the given user
///
/// Projects arrive recency-ordered from the store; the first
/// [`RECENT_PROJECT_LIMIT`] become `recent_projects`. Tasks assigned to
/// `me` arrive newest-first; the first [`MY_TASK_LIMIT`] become `my_tasks`,
/// each resolving its project name through an id map built over the *full*
/// project list, not just the truncated one. A task whose project is missing
/// from the map gets the name `"Unknown"`; the foreign-key invariant makes
/// that unreachable unless the data changed between the two queries.
///
/// Empty inputs yield empty lists; there are no error conditions beyond the
/// store itself.
pub async fn get_home_summary(pool: &SqlitePool, me: &str) -> Result<HomeSummary, sqlx::Error> {
    let projects = Project::list(pool, None).await?;

    let recent_projects = projects
        .iter()
        .take(RECENT_PROJECT_LIMIT)
        .map(|p| HomeProjectSummary {
            id: p.id,
            name: p.name.clone(),
            color: p.color.clone(),
            icon: p.icon.clone(),
        })
        .collect();

    let tasks = Task::list(
        pool,
        TaskFilter {
            assignee: Some(me.to_string()),
            ..Default::default()
        },
    )
    .await?;

    let project_names: HashMap<i64, &str> = projects
        .iter()
        .map(|p| (p.id, p.name.as_str()))
        .collect();

    let my_tasks = tasks
        .into_iter()
        .take(MY_TASK_LIMIT)
        .map(|t| HomeTaskSummary {
            id: t.id,
            name: t.name,
            project_name: project_names
                .get(&t.project_id)
                .map(|name| name.to_string())
                .unwrap_or_else(|| "Unknown".to_string()),
            project_id: t.project_id,
            status: t.status,
        })
        .collect();

    Ok(HomeSummary {
        my_tasks,
        recent_projects,
    })
}
