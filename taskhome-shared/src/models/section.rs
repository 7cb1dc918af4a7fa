/// Section model and database operations
///
/// A section is a named, ordered grouping of tasks within a project.
/// `order_index` defines the display order among sections of the same
/// project.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE sections (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     project_id INTEGER NOT NULL REFERENCES projects(id),
///     name TEXT NOT NULL,
///     order_index INTEGER NOT NULL DEFAULT 0
/// );
/// ```

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Section model
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Section {
    /// Unique section ID
    pub id: i64,

    /// Project this section belongs to
    pub project_id: i64,

    /// Section name
    pub name: String,

    /// Display position among the project's sections
    pub order_index: i64,
}

/// Input for creating a new section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSection {
    /// Project the section belongs to
    pub project_id: i64,

    /// Section name
    pub name: String,

    /// Display position (defaults to 0)
    #[serde(default)]
    pub order_index: i64,
}

impl Section {
    /// Creates a new section
    pub async fn create(pool: &SqlitePool, data: CreateSection) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Section>(
            r#"
            INSERT INTO sections (project_id, name, order_index)
            VALUES (?, ?, ?)
            RETURNING id, project_id, name, order_index
            "#,
        )
        .bind(data.project_id)
        .bind(data.name)
        .bind(data.order_index)
        .fetch_one(pool)
        .await
    }

    /// Lists a project's sections, ordered by `order_index` ascending
    pub async fn list_for_project(
        pool: &SqlitePool,
        project_id: i64,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Section>(
            r#"
            SELECT id, project_id, name, order_index
            FROM sections
            WHERE project_id = ?
            ORDER BY order_index, id
            "#,
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }

    /// Finds a section by ID
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Section>(
            "SELECT id, project_id, name, order_index FROM sections WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
