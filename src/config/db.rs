use anyhow::Context;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::{env, str::FromStr};
use tracing::info;

pub async fn init_database() -> anyhow::Result<SqlitePool> {
    let database_url =
        env::var("DATABASE_URL").context("DATABASE_URL not found in environment variables")?;

    let options = SqliteConnectOptions::from_str(&database_url)
        .context("DATABASE_URL is not a valid sqlite URL")?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .context("Failed to connect to the database")?;

    init_schema(&pool).await?;
    seed_owner(&pool).await?;

    Ok(pool)
}

/// Idempotent schema setup; there is no migration tooling in this service.
pub async fn init_schema(pool: &SqlitePool) -> anyhow::Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            email TEXT NOT NULL UNIQUE,
            role TEXT NOT NULL DEFAULT 'user',
            is_owner BOOLEAN NOT NULL DEFAULT FALSE,
            banned BOOLEAN NOT NULL DEFAULT FALSE,
            ban_reason TEXT,
            created_at TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS polls (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            status TEXT NOT NULL DEFAULT 'active',
            end_date TEXT,
            created_by INTEGER NOT NULL REFERENCES users (id),
            created_at TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS poll_options (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            poll_id INTEGER NOT NULL REFERENCES polls (id) ON DELETE CASCADE,
            option_text TEXT NOT NULL,
            votes INTEGER NOT NULL DEFAULT 0
        )",
    )
    .execute(pool)
    .await?;

    // (user_id, poll_id) primary key is what makes double-voting impossible
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS user_votes (
            user_id INTEGER NOT NULL REFERENCES users (id),
            poll_id INTEGER NOT NULL REFERENCES polls (id),
            option_id INTEGER NOT NULL REFERENCES poll_options (id),
            created_at TEXT NOT NULL,
            PRIMARY KEY (user_id, poll_id)
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Bootstraps the unbannable owner account from OWNER_EMAIL, if configured.
/// No endpoint ever sets is_owner; this seed is the only source of the flag.
async fn seed_owner(pool: &SqlitePool) -> anyhow::Result<()> {
    let Ok(owner_email) = env::var("OWNER_EMAIL") else {
        return Ok(());
    };
    let owner_email = owner_email.trim().to_lowercase();
    if owner_email.is_empty() {
        return Ok(());
    }

    sqlx::query(
        "INSERT INTO users (email, role, is_owner, banned, created_at)
         VALUES ($1, 'admin', TRUE, FALSE, $2)
         ON CONFLICT (email) DO NOTHING",
    )
    .bind(&owner_email)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    info!("Owner account seeded for {}", owner_email);
    Ok(())
}
