//! Persistence layer for the sitekit content backend.
//!
//! Provides pool construction, on-demand schema provisioning and one
//! repository per content table.

pub mod models;
pub mod repositories;
pub mod schema;

use sqlx::postgres::PgPoolOptions;

/// Shared PostgreSQL connection pool.
pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
