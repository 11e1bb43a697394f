//! PostgreSQL adapter for VideoRepository
//!
//! The feed is one hand-written join. The `tags` column is read as raw
//! array-literal text and decoded with [`parse_text_array`].

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::{
    sqlx, DatabaseBackend, DatabaseConnection, DbErr, FromQueryResult, RuntimeErr, Statement,
};
use uuid::Uuid;

use super::parse_text_array;
use crate::domain::entities::{
    Author, AuthorId, FeedEntry, ModerationStatus, TrustTier, Video, VideoId,
};
use crate::domain::ports::VideoRepository;
use crate::error::FeedError;

/// Approved videos with their authors, newest first. `$1` is the row limit.
pub(crate) const FEED_QUERY: &str = r#"
SELECT
    v.id AS video_id, v.title, v.description, v.video_url, v.thumbnail_url,
    v.duration_sec, v.tags::text AS tags, v.created_at, v.moderation_status,
    a.id AS author_id, a.full_name, a.expertise_area, a.trust_tier, a.is_verified
FROM videos v
JOIN authors a ON v.author_id = a.id
WHERE v.moderation_status = 'approved'
ORDER BY v.created_at DESC
LIMIT $1
"#;

/// One row of [`FEED_QUERY`]
#[derive(Debug, Clone, FromQueryResult)]
pub(crate) struct FeedRow {
    video_id: Uuid,
    title: String,
    description: String,
    video_url: String,
    thumbnail_url: Option<String>,
    duration_sec: i32,
    tags: Option<String>,
    created_at: DateTime<FixedOffset>,
    moderation_status: String,
    author_id: Uuid,
    full_name: String,
    expertise_area: String,
    trust_tier: String,
    is_verified: bool,
}

/// PostgreSQL implementation of VideoRepository
pub struct PostgresVideoRepository {
    db: Arc<DatabaseConnection>,
}

impl PostgresVideoRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VideoRepository for PostgresVideoRepository {
    async fn find_approved_with_authors(&self, limit: u64) -> Result<Vec<FeedEntry>, FeedError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            FEED_QUERY,
            [(limit as i64).into()],
        );

        let rows = FeedRow::find_by_statement(stmt)
            .all(&*self.db)
            .await
            .map_err(feed_error_from_db)?;

        rows.into_iter().map(FeedEntry::try_from).collect()
    }
}

/// Decode failures are mapping problems; everything else is storage.
/// sqlx reports a column of the wrong type as a query error, so that case is
/// unwrapped here.
fn feed_error_from_db(err: DbErr) -> FeedError {
    let is_decode = match &err {
        DbErr::Type(_) | DbErr::TryIntoErr { .. } | DbErr::Json(_) => true,
        DbErr::Query(RuntimeErr::SqlxError(e)) => {
            let e: &sqlx::Error = e;
            matches!(
                e,
                sqlx::Error::ColumnDecode { .. }
                    | sqlx::Error::ColumnNotFound(_)
                    | sqlx::Error::Decode(_)
            )
        }
        _ => false,
    };

    if is_decode {
        FeedError::ScanFailure(err.to_string())
    } else {
        FeedError::StorageUnavailable(err.to_string())
    }
}

/// Convert a joined row into a feed entry
impl TryFrom<FeedRow> for FeedEntry {
    type Error = FeedError;

    fn try_from(row: FeedRow) -> Result<Self, Self::Error> {
        let duration_sec = u32::try_from(row.duration_sec).map_err(|_| {
            FeedError::ScanFailure(format!(
                "video {} has negative duration_sec {}",
                row.video_id, row.duration_sec
            ))
        })?;
        let moderation_status = row
            .moderation_status
            .parse::<ModerationStatus>()
            .map_err(FeedError::ScanFailure)?;
        let trust_tier = row
            .trust_tier
            .parse::<TrustTier>()
            .map_err(FeedError::ScanFailure)?;

        Ok(FeedEntry {
            video: Video {
                id: VideoId(row.video_id),
                title: row.title,
                description: row.description,
                video_url: row.video_url,
                thumbnail_url: row.thumbnail_url,
                duration_sec,
                tags: row
                    .tags
                    .as_deref()
                    .map(parse_text_array)
                    .unwrap_or_default(),
                created_at: row.created_at.with_timezone(&Utc),
                moderation_status,
            },
            author: Author {
                id: AuthorId(row.author_id),
                full_name: row.full_name,
                expertise_area: row.expertise_area,
                trust_tier,
                is_verified: row.is_verified,
            },
        })
    }
}
