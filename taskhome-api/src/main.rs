//! # Taskhome API Server
//!
//! This is the API server for Taskhome, a small task-management backend
//! approximating a project-management tool's Home / Projects / Tasks views.
//!
//! ## Architecture
//!
//! The server is built with Axum and provides:
//! - CRUD-style endpoints over workspaces, projects, sections, and tasks
//! - A synthesized "home" aggregation view
//! - Idempotent startup migrations and seeding
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p taskhome-api
//! ```

use taskhome_api::{
    app::{build_router, AppState},
    config::Config,
};
use taskhome_shared::db::{migrations::run_migrations, pool};
use taskhome_shared::seed::seed_defaults;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskhome_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Taskhome API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;

    let db = pool::create_pool(pool::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        ..Default::default()
    })
    .await?;

    run_migrations(&db).await?;
    seed_defaults(&db, &config.seed.workspace_name).await?;

    let addr = config.bind_address();
    let state = AppState::new(db, config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
