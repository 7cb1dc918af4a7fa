/// Workspace model and database operations
///
/// A workspace is the top-level container for projects. Workspaces are
/// created through `get_or_create` during startup seeding and are otherwise
/// immutable.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE workspaces (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     name TEXT NOT NULL UNIQUE
/// );
/// ```

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Workspace model
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Workspace {
    /// Unique workspace ID
    pub id: i64,

    /// Workspace name (unique across the store)
    pub name: String,
}

impl Workspace {
    /// Looks up a workspace by name, creating it if absent
    ///
    /// The insert is a conditional no-op on conflict, so concurrent callers
    /// with the same name cannot double-insert; whoever loses the insert
    /// still reads back the winner's row.
    pub async fn get_or_create(pool: &SqlitePool, name: &str) -> Result<Self, sqlx::Error> {
        sqlx::query("INSERT INTO workspaces (name) VALUES (?) ON CONFLICT(name) DO NOTHING")
            .bind(name)
            .execute(pool)
            .await?;

        sqlx::query_as::<_, Workspace>("SELECT id, name FROM workspaces WHERE name = ?")
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// Lists all workspaces, ordered by id ascending
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Workspace>("SELECT id, name FROM workspaces ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Finds a workspace by ID
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Workspace>("SELECT id, name FROM workspaces WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
