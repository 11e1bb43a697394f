//! Demo data loader
//!
//! Idempotent: the demo user and author are reused when present, the demo
//! author's videos are replaced, and quizzes are only added for videos that
//! have none.

use std::sync::Arc;

use anyhow::Context;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, Set, Statement, TransactionTrait,
};
use uuid::Uuid;

use super::schema;
use crate::adapters::PostgresUserRepository;
use crate::auth::hash_password;
use crate::domain::entities::{
    AuthorId, ModerationStatus, NewAuthor, NewUser, NewVideo, Quiz, TrustTier, User, UserId,
    VideoId,
};
use crate::domain::ports::UserRepository;
use crate::entity::authors;

pub const DEMO_EMAIL: &str = "demo@mindly.dev";
const DEMO_USERNAME: &str = "demo_user";
const DEMO_PASSWORD: &str = "mindly123";

const INSERT_VIDEO: &str = r#"
INSERT INTO videos (
    author_id, title, description, video_url, thumbnail_url,
    duration_sec, tags, moderation_status, created_at, updated_at
) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
RETURNING id
"#;

const INSERT_QUIZ: &str = r#"
INSERT INTO quizzes (video_id, question, correct_answer, wrong_answers, points_awarded)
VALUES ($1, $2, $3, $4, $5)
ON CONFLICT (video_id) DO NOTHING
"#;

/// What a seed run wrote
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub videos_removed: u64,
    pub videos_added: usize,
    pub quizzes_added: u64,
}

/// Load the demo data set. Fails before writing anything if the schema
/// version does not match this build.
pub async fn run(db: &Arc<DatabaseConnection>) -> anyhow::Result<SeedReport> {
    schema::ensure_schema_version(&**db)
        .await
        .context("refusing to seed")?;

    let users = PostgresUserRepository::new(Arc::clone(db));
    let user = demo_user(&users).await?;
    tracing::info!(user_id = %user.id, "Using demo user");

    let author_id = demo_author(db, user.id).await?;
    tracing::info!(author_id = %author_id, "Using demo author");

    let txn = db.begin().await?;
    let mut report = SeedReport {
        videos_removed: txn
            .execute(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                "DELETE FROM videos WHERE author_id = $1",
                [author_id.0.into()],
            ))
            .await?
            .rows_affected(),
        ..SeedReport::default()
    };

    // Newest first in the feed matches the listing order below
    let now = Utc::now();
    for (i, video) in demo_videos(author_id).into_iter().enumerate() {
        let created_at = now - Duration::minutes(i as i64);
        let video_id = insert_video(&txn, &video, created_at)
            .await
            .with_context(|| format!("failed to insert video '{}'", video.title))?;
        report.videos_added += 1;

        report.quizzes_added += insert_quiz(&txn, &demo_quiz(video_id))
            .await
            .with_context(|| format!("failed to insert quiz for '{}'", video.title))?;
    }
    txn.commit().await?;

    tracing::info!(
        removed = report.videos_removed,
        videos = report.videos_added,
        quizzes = report.quizzes_added,
        "Demo data loaded"
    );

    Ok(report)
}

async fn demo_user(users: &PostgresUserRepository) -> anyhow::Result<User> {
    if let Some(user) = users.find_by_email(DEMO_EMAIL).await? {
        return Ok(user);
    }

    let user = users
        .create(&NewUser {
            email: DEMO_EMAIL.to_string(),
            username: DEMO_USERNAME.to_string(),
            password_hash: hash_password(DEMO_PASSWORD)?,
            full_name: Some("Demo User".to_string()),
        })
        .await?;

    Ok(user)
}

async fn demo_author(db: &DatabaseConnection, user_id: UserId) -> Result<AuthorId, DbErr> {
    let existing = authors::Entity::find()
        .filter(authors::Column::UserId.eq(user_id.0))
        .one(db)
        .await?;

    if let Some(author) = existing {
        return Ok(AuthorId(author.id));
    }

    let profile = demo_author_profile(user_id);
    let now = Utc::now().fixed_offset();
    let model = authors::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(profile.user_id.map(|id| id.0)),
        full_name: Set(profile.full_name),
        expertise_area: Set(profile.expertise_area),
        trust_tier: Set(profile.trust_tier.to_string()),
        bio: Set(profile.bio),
        is_verified: Set(profile.is_verified),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let inserted = model.insert(db).await?;
    Ok(AuthorId(inserted.id))
}

async fn insert_video<C>(
    db: &C,
    video: &NewVideo,
    created_at: DateTime<Utc>,
) -> Result<VideoId, DbErr>
where
    C: ConnectionTrait,
{
    let duration = i32::try_from(video.duration_sec)
        .map_err(|_| DbErr::Custom(format!("duration {} out of range", video.duration_sec)))?;

    let row = db
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            INSERT_VIDEO,
            [
                video.author_id.0.into(),
                video.title.clone().into(),
                video.description.clone().into(),
                video.video_url.clone().into(),
                video.thumbnail_url.clone().into(),
                duration.into(),
                video.tags.clone().into(),
                video.moderation_status.to_string().into(),
                created_at.into(),
            ],
        ))
        .await?
        .ok_or(DbErr::RecordNotInserted)?;

    Ok(VideoId(row.try_get("", "id")?))
}

async fn insert_quiz<C>(db: &C, quiz: &Quiz) -> Result<u64, DbErr>
where
    C: ConnectionTrait,
{
    let result = db
        .execute(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            INSERT_QUIZ,
            [
                quiz.video_id.0.into(),
                quiz.question.clone().into(),
                quiz.correct_answer.clone().into(),
                quiz.wrong_answers.clone().into(),
                quiz.points_awarded.into(),
            ],
        ))
        .await?;

    Ok(result.rows_affected())
}

fn demo_author_profile(user_id: UserId) -> NewAuthor {
    NewAuthor {
        user_id: Some(user_id),
        full_name: "Dmitry Programmer".to_string(),
        expertise_area: "IT".to_string(),
        trust_tier: TrustTier::Gold,
        bio: Some(
            "Backend developer with ten years of experience in Go, microservices and DevOps."
                .to_string(),
        ),
        is_verified: true,
    }
}

fn demo_quiz(video_id: VideoId) -> Quiz {
    Quiz::new(
        video_id,
        "Was this video useful?",
        "Yes, I learned something new",
        tags(&["I already knew this", "Too complicated", "Off topic"]),
    )
}

struct DemoVideo {
    title: &'static str,
    description: &'static str,
    sample: &'static str,
    thumbnail: Option<&'static str>,
    duration_sec: u32,
    tags: &'static [&'static str],
    moderation_status: ModerationStatus,
}

const DEMO_VIDEOS: &[DemoVideo] = &[
    DemoVideo {
        title: "What is an API in 60 seconds",
        description: "A beginner-friendly explanation of how applications talk to each other.",
        sample: "BigBuckBunny",
        thumbnail: Some("s7wmiS2mSXY"),
        duration_sec: 60,
        tags: &["programming", "api", "web"],
        moderation_status: ModerationStatus::Approved,
    },
    DemoVideo {
        title: "Go language basics",
        description: "Why Go is popular for backend development and what its main features are.",
        sample: "ElephantsDream",
        thumbnail: Some("yoTahYcKnyo"),
        duration_sec: 90,
        tags: &["golang", "go", "programming"],
        moderation_status: ModerationStatus::Approved,
    },
    DemoVideo {
        title: "HTTP vs HTTPS in plain words",
        description: "The difference between HTTP and HTTPS, and why the \"S\" matters.",
        sample: "ForBiggerBlazes",
        thumbnail: Some("hExRDVZHhig"),
        duration_sec: 75,
        tags: &["http", "security", "web"],
        moderation_status: ModerationStatus::Approved,
    },
    DemoVideo {
        title: "SQL in 80 seconds",
        description: "Core SQL for beginners: SELECT, INSERT, UPDATE, DELETE.",
        sample: "ForBiggerEscapes",
        thumbnail: Some("7V_mN1-d2eM"),
        duration_sec: 80,
        tags: &["sql", "databases", "postgresql"],
        moderation_status: ModerationStatus::Approved,
    },
    DemoVideo {
        title: "Beating procrastination",
        description: "Practical advice for developers, and everyone else.",
        sample: "ForBiggerFun",
        thumbnail: None,
        duration_sec: 85,
        tags: &["productivity", "psychology", "self improvement"],
        moderation_status: ModerationStatus::Approved,
    },
    DemoVideo {
        title: "Draft: indexes, \"the fast path\"",
        description: "Waiting for review; must not appear in the feed.",
        sample: "ForBiggerJoyrides",
        thumbnail: None,
        duration_sec: 70,
        tags: &["sql", "indexes, btree", "draft"],
        moderation_status: ModerationStatus::Pending,
    },
];

fn demo_videos(author_id: AuthorId) -> Vec<NewVideo> {
    DEMO_VIDEOS
        .iter()
        .map(|demo| NewVideo {
            author_id,
            title: demo.title.to_string(),
            description: demo.description.to_string(),
            video_url: format!(
                "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/{}.mp4",
                demo.sample
            ),
            thumbnail_url: demo
                .thumbnail
                .map(|id| format!("https://img.youtube.com/vi/{}/mqdefault.jpg", id)),
            duration_sec: demo.duration_sec,
            tags: tags(demo.tags),
            moderation_status: demo.moderation_status,
        })
        .collect()
}

fn tags(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| label.to_string()).collect()
}
