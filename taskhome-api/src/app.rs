/// Application state and router builder
///
/// This module defines the shared application state and provides a function
/// to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use taskhome_api::{app::AppState, config::Config};
/// use taskhome_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = create_pool(DatabaseConfig {
///     url: config.database.url.clone(),
///     max_connections: config.database.max_connections,
///     ..Default::default()
/// })
/// .await?;
/// let state = AppState::new(pool, config);
/// let app = taskhome_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use axum::{
    routing::{get, post},
    Router,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// This is cloned for each request handler via Axum's `State` extractor.
/// Uses Arc internally for cheap cloning.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: SqlitePool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── /health                          # Health check (root, unprefixed)
/// └── {prefix}/                        # default /api
///     ├── GET  /home                   # Home summary
///     ├── GET  /projects               # List projects (?workspace_id)
///     ├── POST /projects               # Create project
///     ├── GET  /projects/:id           # Get project
///     ├── GET  /projects/:id/sections  # List project sections
///     ├── GET  /projects/:id/tasks     # List project tasks (?status&assignee)
///     ├── POST /tasks                  # Create task
///     ├── GET  /tasks/:id              # Get task
///     └── PATCH /tasks/:id             # Partial update
/// ```
///
/// # Middleware Stack
///
/// 1. Request logging (tower-http TraceLayer)
/// 2. Permissive CORS for the local frontend (tower-http CorsLayer)
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let api_routes = Router::new()
        .route("/home", get(routes::home::get_home))
        .route(
            "/projects",
            get(routes::projects::list_projects).post(routes::projects::create_project),
        )
        .route("/projects/:project_id", get(routes::projects::get_project))
        .route(
            "/projects/:project_id/sections",
            get(routes::projects::get_project_sections),
        )
        .route(
            "/projects/:project_id/tasks",
            get(routes::projects::get_project_tasks),
        )
        .route("/tasks", post(routes::tasks::create_task))
        .route(
            "/tasks/:task_id",
            get(routes::tasks::get_task).patch(routes::tasks::update_task),
        );

    Router::new()
        .route("/health", get(routes::health::health_check))
        .nest(&state.config.api.prefix, api_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
