/// Startup seeding
///
/// One-shot initialization invoked from `main` before the server starts
/// accepting requests: ensures the default workspace exists and gives it a
/// starter project if it has none, so a fresh store is immediately usable.

use sqlx::SqlitePool;
use tracing::info;

use crate::models::project::{CreateProject, Project};
use crate::models::workspace::Workspace;

/// Ensures the default workspace and its starter project exist
///
/// Idempotent: the workspace is get-or-create and the project is only
/// inserted when the workspace has no projects at all.
pub async fn seed_defaults(pool: &SqlitePool, workspace_name: &str) -> Result<Workspace, sqlx::Error> {
    let workspace = Workspace::get_or_create(pool, workspace_name).await?;

    let existing = Project::list(pool, Some(workspace.id)).await?;
    if existing.is_empty() {
        let project = Project::create(
            pool,
            CreateProject {
                workspace_id: workspace.id,
                name: "My First Project".to_string(),
                color: Some("#3a258e".to_string()),
                icon: Some("list".to_string()),
            },
        )
        .await?;
        info!(
            workspace_id = workspace.id,
            project_id = project.id,
            "Seeded default workspace with starter project"
        );
    } else {
        info!(workspace_id = workspace.id, "Default workspace already seeded");
    }

    Ok(workspace)
}
