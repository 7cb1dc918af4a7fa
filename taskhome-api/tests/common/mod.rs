/// Common test utilities for API integration tests
///
/// Each test gets its own in-memory SQLite store with migrations applied and
/// a router built on top of it, so tests are independent and need no running
/// server or external services.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use taskhome_api::app::{build_router, AppState};
use taskhome_api::config::{ApiConfig, Config, DatabaseConfig, SeedConfig};
use tower::ServiceExt as _;

/// Test context containing the database pool and the router under test
pub struct TestContext {
    pub db: SqlitePool,
    pub app: Router,
}

impl TestContext {
    /// Creates a new test context over a fresh in-memory database
    pub async fn new() -> anyhow::Result<Self> {
        let db = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        taskhome_shared::db::migrations::run_migrations(&db).await?;

        let config = Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                prefix: "/api".to_string(),
            },
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
            },
            seed: SeedConfig {
                workspace_name: "Demo Workspace".to_string(),
            },
        };

        let app = build_router(AppState::new(db.clone(), config));

        Ok(Self { db, app })
    }

    /// Sends a GET request and returns status plus parsed JSON body
    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// Sends a POST request with a JSON body
    pub async fn post(&self, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// Sends a PATCH request with a JSON body
    pub async fn patch(
        &self,
        uri: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("PATCH")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }
}

/// Creates a workspace directly in the store and returns its id
pub async fn seed_workspace(ctx: &TestContext, name: &str) -> i64 {
    taskhome_shared::models::workspace::Workspace::get_or_create(&ctx.db, name)
        .await
        .unwrap()
        .id
}
