//! Versioned schema contract
//!
//! The binary knows exactly one schema version. `apply_schema` creates it
//! idempotently; anything that writes rows checks the recorded version first
//! instead of guessing which columns exist.

use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, Statement, TransactionTrait,
};
use thiserror::Error;

/// Schema version this build reads and writes
pub const SCHEMA_VERSION: i32 = 1;

const SCHEMA_DDL: &[&str] = &[
    "CREATE EXTENSION IF NOT EXISTS pgcrypto",
    r#"CREATE TABLE IF NOT EXISTS users (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        email TEXT NOT NULL UNIQUE,
        username TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        full_name TEXT,
        score INTEGER NOT NULL DEFAULT 0,
        current_streak INTEGER NOT NULL DEFAULT 0,
        best_streak INTEGER NOT NULL DEFAULT 0,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )"#,
    r#"CREATE TABLE IF NOT EXISTS authors (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        user_id UUID REFERENCES users(id) ON DELETE SET NULL,
        full_name TEXT NOT NULL,
        expertise_area TEXT NOT NULL,
        trust_tier TEXT NOT NULL DEFAULT 'bronze'
            CHECK (trust_tier IN ('bronze', 'silver', 'gold')),
        bio TEXT,
        is_verified BOOLEAN NOT NULL DEFAULT FALSE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )"#,
    r#"CREATE TABLE IF NOT EXISTS videos (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        author_id UUID NOT NULL REFERENCES authors(id) ON DELETE CASCADE,
        title TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        video_url TEXT NOT NULL,
        thumbnail_url TEXT,
        duration_sec INTEGER NOT NULL CHECK (duration_sec >= 0),
        tags TEXT[] NOT NULL DEFAULT '{}',
        moderation_status TEXT NOT NULL DEFAULT 'pending'
            CHECK (moderation_status IN ('pending', 'approved', 'rejected')),
        created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )"#,
    r#"CREATE INDEX IF NOT EXISTS idx_videos_approved_recent
        ON videos (created_at DESC) WHERE moderation_status = 'approved'"#,
    r#"CREATE TABLE IF NOT EXISTS quizzes (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        video_id UUID NOT NULL UNIQUE REFERENCES videos(id) ON DELETE CASCADE,
        question TEXT NOT NULL,
        correct_answer TEXT NOT NULL,
        wrong_answers TEXT[] NOT NULL DEFAULT '{}',
        points_awarded INTEGER NOT NULL DEFAULT 10,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )"#,
    r#"CREATE TABLE IF NOT EXISTS schema_version (
        singleton BOOLEAN PRIMARY KEY DEFAULT TRUE CHECK (singleton),
        version INTEGER NOT NULL,
        applied_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )"#,
];

const RECORD_VERSION: &str = r#"
INSERT INTO schema_version (singleton, version) VALUES (TRUE, $1)
ON CONFLICT (singleton) DO UPDATE SET version = EXCLUDED.version, applied_at = now()
"#;

/// Schema contract violations
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("database schema is not initialized; run `mindly-api migrate` first")]
    Missing,

    #[error("database schema version {found} does not match expected version {expected}")]
    Mismatch { expected: i32, found: i32 },

    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

/// Create the schema (idempotent) and record [`SCHEMA_VERSION`].
/// Refuses to run against a database created by a newer build.
pub async fn apply_schema(db: &DatabaseConnection) -> Result<i32, SchemaError> {
    if let Some(found) = current_version(db).await? {
        if found > SCHEMA_VERSION {
            return Err(SchemaError::Mismatch {
                expected: SCHEMA_VERSION,
                found,
            });
        }
    }

    let txn = db.begin().await?;
    for ddl in SCHEMA_DDL {
        txn.execute_unprepared(ddl).await?;
    }
    txn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        RECORD_VERSION,
        [SCHEMA_VERSION.into()],
    ))
    .await?;
    txn.commit().await?;

    tracing::info!(version = SCHEMA_VERSION, "Database schema applied");
    Ok(SCHEMA_VERSION)
}

/// Recorded schema version, `None` when the schema was never applied
pub async fn current_version<C>(db: &C) -> Result<Option<i32>, DbErr>
where
    C: ConnectionTrait,
{
    let present = db
        .query_one(Statement::from_string(
            DatabaseBackend::Postgres,
            "SELECT to_regclass('public.schema_version') IS NOT NULL AS present",
        ))
        .await?
        .map(|row| row.try_get::<bool>("", "present"))
        .transpose()?
        .unwrap_or(false);

    if !present {
        return Ok(None);
    }

    db.query_one(Statement::from_string(
        DatabaseBackend::Postgres,
        "SELECT version FROM schema_version",
    ))
    .await?
    .map(|row| row.try_get::<i32>("", "version"))
    .transpose()
}

/// Fail unless the database carries exactly [`SCHEMA_VERSION`]
pub async fn ensure_schema_version<C>(db: &C) -> Result<(), SchemaError>
where
    C: ConnectionTrait,
{
    check_version(current_version(db).await?)
}

fn check_version(found: Option<i32>) -> Result<(), SchemaError> {
    match found {
        None => Err(SchemaError::Missing),
        Some(found) if found == SCHEMA_VERSION => Ok(()),
        Some(found) => Err(SchemaError::Mismatch {
            expected: SCHEMA_VERSION,
            found,
        }),
    }
}
