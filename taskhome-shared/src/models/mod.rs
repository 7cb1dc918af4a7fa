/// Database models for Taskhome
///
/// This module contains all database models and their query operations.
///
/// # Models
///
/// - `workspace`: Top-level tenant/container for projects
/// - `project`: Named container for sections and tasks within a workspace
/// - `section`: Named, ordered grouping of tasks within a project
/// - `task`: Unit of work belonging to a project and optionally a section
///
/// # Example
///
/// ```no_run
/// use taskhome_shared::models::project::{CreateProject, Project};
/// use taskhome_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let project = Project::create(&pool, CreateProject {
///     workspace_id: 1,
///     name: "My First Project".to_string(),
///     color: Some("#3a258e".to_string()),
///     icon: Some("list".to_string()),
/// })
/// .await?;
/// # Ok(())
/// # }
/// ```

pub mod project;
pub mod section;
pub mod task;
pub mod workspace;
