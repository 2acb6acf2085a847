//! On-demand schema provisioning.
//!
//! The content tables are created lazily rather than through a migration
//! directory: [`ensure_schema`] is called once at startup and may be
//! called again at any time. Every statement is guarded with
//! `IF NOT EXISTS`, and the handful of Postgres "already there" error
//! codes that can still surface when two cold instances race the same
//! step are treated as success.

use crate::DbPool;

/// Base tables, followed by the additive evolution of `portfolio_items`
/// (`gallery`, `size` and `youtube_link` were added after the first
/// deployment and may be missing from older databases).
const STATEMENTS: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS page_sections (
        page TEXT PRIMARY KEY,
        title TEXT NOT NULL,
        subtitle TEXT,
        background_image TEXT NOT NULL DEFAULT ''
    )",
    "CREATE TABLE IF NOT EXISTS about_content (
        id SMALLINT PRIMARY KEY DEFAULT 1 CHECK (id = 1),
        title TEXT NOT NULL DEFAULT '',
        vision_title TEXT NOT NULL DEFAULT '',
        vision_content TEXT NOT NULL DEFAULT '',
        values_title TEXT NOT NULL DEFAULT '',
        values_items TEXT NOT NULL DEFAULT '',
        greetings_title TEXT NOT NULL DEFAULT '',
        greetings_desc TEXT NOT NULL DEFAULT '',
        logo TEXT NOT NULL DEFAULT '',
        logo_align TEXT NOT NULL DEFAULT 'left',
        timeline TEXT
    )",
    "CREATE TABLE IF NOT EXISTS portfolio_items (
        id UUID PRIMARY KEY,
        title TEXT NOT NULL DEFAULT '',
        period TEXT NOT NULL DEFAULT '',
        role TEXT NOT NULL DEFAULT '',
        overview TEXT NOT NULL DEFAULT '',
        details TEXT NOT NULL DEFAULT '[]',
        client TEXT NOT NULL DEFAULT '',
        image TEXT NOT NULL DEFAULT '',
        category TEXT NOT NULL DEFAULT ''
    )",
    "ALTER TABLE portfolio_items ADD COLUMN IF NOT EXISTS gallery TEXT",
    "ALTER TABLE portfolio_items ADD COLUMN IF NOT EXISTS size TEXT",
    "ALTER TABLE portfolio_items ADD COLUMN IF NOT EXISTS youtube_link TEXT",
    "CREATE TABLE IF NOT EXISTS download_categories (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        CONSTRAINT uq_download_categories_name UNIQUE (name)
    )",
    "CREATE TABLE IF NOT EXISTS downloads (
        id UUID PRIMARY KEY,
        title TEXT NOT NULL DEFAULT '',
        description TEXT NOT NULL DEFAULT '',
        category TEXT NOT NULL DEFAULT '',
        file_url TEXT NOT NULL DEFAULT '',
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )",
    "CREATE TABLE IF NOT EXISTS notices (
        id BIGSERIAL PRIMARY KEY,
        title TEXT NOT NULL DEFAULT '',
        content TEXT NOT NULL DEFAULT '',
        author TEXT NOT NULL DEFAULT '',
        date TIMESTAMPTZ NOT NULL DEFAULT now(),
        views BIGINT NOT NULL DEFAULT 0
    )",
    "CREATE TABLE IF NOT EXISTS main_cards (
        id BIGSERIAL PRIMARY KEY,
        title TEXT NOT NULL DEFAULT '',
        description TEXT NOT NULL DEFAULT '',
        link TEXT NOT NULL DEFAULT '',
        icon TEXT NOT NULL DEFAULT ''
    )",
];

/// Create any missing content tables and columns. Idempotent and safe to
/// race: a concurrent caller completing the same step is not an error.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    for statement in STATEMENTS {
        execute_idempotent(pool, statement).await?;
    }
    tracing::debug!("content schema ensured");
    Ok(())
}

/// Run one DDL statement, swallowing the "already exists" failures a
/// concurrent `ensure_schema` can produce despite `IF NOT EXISTS`
/// (42P07 duplicate table, 42701 duplicate column, 23505 from the
/// pg_type race on simultaneous CREATE TABLE).
async fn execute_idempotent(pool: &DbPool, statement: &str) -> Result<(), sqlx::Error> {
    match sqlx::query(statement).execute(pool).await {
        Ok(_) => Ok(()),
        Err(sqlx::Error::Database(err))
            if matches!(err.code().as_deref(), Some("42P07" | "42701" | "23505")) =>
        {
            Ok(())
        }
        Err(other) => Err(other),
    }
}
