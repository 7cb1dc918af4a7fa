/// Project model and database operations
///
/// A project belongs to exactly one workspace and owns zero or more sections
/// and tasks. `updated_at` reflects the most recent mutation, so recency
/// ordering in listings is "most-recently-touched first".
///
/// # Schema
///
/// ```sql
/// CREATE TABLE projects (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     workspace_id INTEGER NOT NULL REFERENCES workspaces(id),
///     name TEXT NOT NULL,
///     color TEXT,
///     icon TEXT,
///     is_archived BOOLEAN NOT NULL DEFAULT FALSE,
///     created_at TEXT NOT NULL,
///     updated_at TEXT NOT NULL
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use taskhome_shared::models::project::{CreateProject, Project};
/// use sqlx::SqlitePool;
///
/// # async fn example(pool: SqlitePool) -> Result<(), sqlx::Error> {
/// let project = Project::create(&pool, CreateProject {
///     workspace_id: 1,
///     name: "Roadmap".to_string(),
///     color: None,
///     icon: None,
/// })
/// .await?;
///
/// // Most recently touched projects first
/// let recent = Project::list(&pool, None).await?;
/// assert_eq!(recent.first().map(|p| p.id), Some(project.id));
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

const PROJECT_COLUMNS: &str =
    "id, workspace_id, name, color, icon, is_archived, created_at, updated_at";

/// Project model
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    /// Unique project ID
    pub id: i64,

    /// Workspace this project belongs to
    pub workspace_id: i64,

    /// Human-readable project name
    pub name: String,

    /// Display color (e.g., "#3a258e")
    pub color: Option<String>,

    /// Display icon identifier
    pub icon: Option<String>,

    /// Whether the project is archived
    pub is_archived: bool,

    /// When the project was created
    pub created_at: DateTime<Utc>,

    /// When the project was last mutated
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProject {
    /// Workspace the project belongs to
    pub workspace_id: i64,

    /// Project name
    pub name: String,

    /// Display color
    pub color: Option<String>,

    /// Display icon identifier
    pub icon: Option<String>,
}

impl Project {
    /// Creates a new project
    ///
    /// The id and both timestamps are store-assigned; the returned row
    /// reflects post-commit state.
    pub async fn create(pool: &SqlitePool, data: CreateProject) -> Result<Self, sqlx::Error> {
        let now = Utc::now();

        sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (workspace_id, name, color, icon, is_archived, created_at, updated_at)
            VALUES (?, ?, ?, ?, FALSE, ?, ?)
            RETURNING id, workspace_id, name, color, icon, is_archived, created_at, updated_at
            "#,
        )
        .bind(data.workspace_id)
        .bind(data.name)
        .bind(data.color)
        .bind(data.icon)
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await
    }

    /// Lists projects, optionally filtered by workspace
    ///
    /// Ordered by `updated_at` descending (most-recently-touched first),
    /// with id as a deterministic tiebreaker.
    pub async fn list(
        pool: &SqlitePool,
        workspace_id: Option<i64>,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let mut query: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {PROJECT_COLUMNS} FROM projects"));

        if let Some(workspace_id) = workspace_id {
            query.push(" WHERE workspace_id = ").push_bind(workspace_id);
        }

        query.push(" ORDER BY updated_at DESC, id DESC");

        query.build_query_as::<Project>().fetch_all(pool).await
    }

    /// Finds a project by ID
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Project>(&format!(
            "SELECT {PROJECT_COLUMNS} FROM projects WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
