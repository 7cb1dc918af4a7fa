/// Task model and database operations
///
/// A task is the unit of work: it belongs to exactly one project and
/// optionally one section (which must belong to the same project — enforced
/// at write time by the API layer, not by the schema). Status is a free-form
/// string defaulting to `"inbox"`.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tasks (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     project_id INTEGER NOT NULL REFERENCES projects(id),
///     section_id INTEGER REFERENCES sections(id),
///     name TEXT NOT NULL,
///     description TEXT,
///     status TEXT NOT NULL DEFAULT 'inbox',
///     assignee TEXT,
///     due_date TEXT,
///     priority TEXT,
///     created_at TEXT NOT NULL,
///     completed_at TEXT
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use taskhome_shared::models::task::{CreateTask, Task, TaskFilter, UpdateTask};
/// use sqlx::SqlitePool;
///
/// # async fn example(pool: SqlitePool) -> Result<(), sqlx::Error> {
/// let task = Task::create(&pool, CreateTask {
///     project_id: 1,
///     section_id: None,
///     name: "Write launch notes".to_string(),
///     description: None,
///     status: "inbox".to_string(),
///     assignee: Some("me".to_string()),
///     due_date: None,
///     priority: None,
/// })
/// .await?;
///
/// // Reassign without touching any other field
/// let patch = UpdateTask {
///     assignee: Some(Some("alex".to_string())),
///     ..Default::default()
/// };
/// Task::update(&pool, task.id, patch).await?;
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

const TASK_COLUMNS: &str = "id, project_id, section_id, name, description, status, assignee, \
                            due_date, priority, created_at, completed_at";

/// Task model
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task ID
    pub id: i64,

    /// Project this task belongs to
    pub project_id: i64,

    /// Optional section within the same project
    pub section_id: Option<i64>,

    /// Human-readable task name
    pub name: String,

    /// Longer free-form description
    pub description: Option<String>,

    /// Workflow status (e.g., "inbox", "today", "completed")
    pub status: String,

    /// Assignee identifier
    pub assignee: Option<String>,

    /// Due date, if any
    pub due_date: Option<NaiveDate>,

    /// Priority label, if any
    pub priority: Option<String>,

    /// When the task was created
    pub created_at: DateTime<Utc>,

    /// When the task was completed (null while open)
    pub completed_at: Option<DateTime<Utc>>,
}

/// Input for creating a new task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    /// Project the task belongs to
    pub project_id: i64,

    /// Optional section (must belong to the same project)
    pub section_id: Option<i64>,

    /// Task name
    pub name: String,

    /// Longer free-form description
    pub description: Option<String>,

    /// Workflow status (defaults to "inbox")
    #[serde(default = "default_status")]
    pub status: String,

    /// Assignee identifier
    pub assignee: Option<String>,

    /// Due date
    pub due_date: Option<NaiveDate>,

    /// Priority label
    pub priority: Option<String>,
}

fn default_status() -> String {
    "inbox".to_string()
}

/// Partial update for a task
///
/// Only fields explicitly present in the request body are applied, so an
/// omitted field and a field explicitly set to `null` stay distinguishable:
/// for nullable columns the outer `Option` is "was the field present" and
/// the inner `Option` is the new value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTask {
    /// New task name
    pub name: Option<String>,

    /// New description (explicit null clears it)
    #[serde(default, deserialize_with = "deserialize_some")]
    pub description: Option<Option<String>>,

    /// New workflow status
    pub status: Option<String>,

    /// New assignee (explicit null unassigns)
    #[serde(default, deserialize_with = "deserialize_some")]
    pub assignee: Option<Option<String>>,

    /// New due date (explicit null clears it)
    #[serde(default, deserialize_with = "deserialize_some")]
    pub due_date: Option<Option<NaiveDate>>,

    /// New priority (explicit null clears it)
    #[serde(default, deserialize_with = "deserialize_some")]
    pub priority: Option<Option<String>>,

    /// New section (explicit null detaches the task from its section)
    #[serde(default, deserialize_with = "deserialize_some")]
    pub section_id: Option<Option<i64>>,
}

/// Deserializes any value (including null) into `Some(value)`, so that a
/// missing field (handled by `#[serde(default)]`) stays `None`.
fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

impl UpdateTask {
    /// Returns true if no field is set
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.assignee.is_none()
            && self.due_date.is_none()
            && self.priority.is_none()
            && self.section_id.is_none()
    }
}

/// Equality filters for task listings
///
/// Each filter is an independent predicate; present filters are combined
/// conjunctively. Matching is exact and case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Restrict to one project
    pub project_id: Option<i64>,

    /// Restrict to one assignee
    pub assignee: Option<String>,

    /// Restrict to one status
    pub status: Option<String>,
}

impl Task {
    /// Creates a new task
    ///
    /// The id and `created_at` are store-assigned; the returned row reflects
    /// post-commit state.
    pub async fn create(pool: &SqlitePool, data: CreateTask) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (project_id, section_id, name, description, status,
                               assignee, due_date, priority, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id, project_id, section_id, name, description, status, assignee,
                      due_date, priority, created_at, completed_at
            "#,
        )
        .bind(data.project_id)
        .bind(data.section_id)
        .bind(data.name)
        .bind(data.description)
        .bind(data.status)
        .bind(data.assignee)
        .bind(data.due_date)
        .bind(data.priority)
        .bind(Utc::now())
        .fetch_one(pool)
        .await
    }

    /// Finds a task by ID
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Task>(&format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?"))
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Lists tasks matching the given filters
    ///
    /// Ordered by `created_at` descending (newest first), with id as a
    /// deterministic tiebreaker.
    pub async fn list(pool: &SqlitePool, filter: TaskFilter) -> Result<Vec<Self>, sqlx::Error> {
        let mut query: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {TASK_COLUMNS} FROM tasks WHERE 1 = 1"));

        if let Some(project_id) = filter.project_id {
            query.push(" AND project_id = ").push_bind(project_id);
        }
        if let Some(assignee) = filter.assignee {
            query.push(" AND assignee = ").push_bind(assignee);
        }
        if let Some(status) = filter.status {
            query.push(" AND status = ").push_bind(status);
        }

        query.push(" ORDER BY created_at DESC, id DESC");

        query.build_query_as::<Task>().fetch_all(pool).await
    }

    /// Applies a partial update and returns the refreshed row
    ///
    /// Only fields present in `patch` are written; everything else keeps its
    /// prior value. Returns `None` if no task with the given id exists.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        patch: UpdateTask,
    ) -> Result<Option<Self>, sqlx::Error> {
        if patch.is_empty() {
            return Self::find_by_id(pool, id).await;
        }

        let mut query: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE tasks SET ");

        {
            let mut updates = query.separated(", ");

            if let Some(name) = patch.name {
                updates.push("name = ").push_bind_unseparated(name);
            }
            if let Some(description) = patch.description {
                updates
                    .push("description = ")
                    .push_bind_unseparated(description);
            }
            if let Some(status) = patch.status {
                updates.push("status = ").push_bind_unseparated(status);
            }
            if let Some(assignee) = patch.assignee {
                updates.push("assignee = ").push_bind_unseparated(assignee);
            }
            if let Some(due_date) = patch.due_date {
                updates.push("due_date = ").push_bind_unseparated(due_date);
            }
            if let Some(priority) = patch.priority {
                updates.push("priority = ").push_bind_unseparated(priority);
            }
            if let Some(section_id) = patch.section_id {
                updates
                    .push("section_id = ")
                    .push_bind_unseparated(section_id);
            }
        }

        query.push(" WHERE id = ").push_bind(id);
        query.push(&format!(" RETURNING {TASK_COLUMNS}"));

        query.build_query_as::<Task>().fetch_optional(pool).await
    }
}
