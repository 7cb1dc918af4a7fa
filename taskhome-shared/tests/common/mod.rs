/// Common test utilities for shared-crate integration tests
///
/// Each test gets its own in-memory SQLite store with the full schema
/// applied, so tests are independent and need no external services.

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

/// Creates a fresh in-memory database with migrations applied
///
/// A single connection is used so every query sees the same in-memory store.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory database should connect");

    taskhome_shared::db::migrations::run_migrations(&pool)
        .await
        .expect("migrations should apply");

    pool
}
