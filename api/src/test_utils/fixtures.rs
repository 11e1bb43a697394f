//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::{
    Author, AuthorId, FeedEntry, ModerationStatus, TrustTier, User, UserId, Video, VideoId,
};

/// Create a verified gold-tier author
pub fn test_author() -> Author {
    Author {
        id: AuthorId(Uuid::new_v4()),
        full_name: "Test Author".to_string(),
        expertise_area: "IT".to_string(),
        trust_tier: TrustTier::Gold,
        is_verified: true,
    }
}

/// Create a video published `minutes_ago` minutes before now
pub fn test_video(title: &str, status: ModerationStatus, minutes_ago: i64) -> Video {
    Video {
        id: VideoId(Uuid::new_v4()),
        title: title.to_string(),
        description: format!("About {}", title),
        video_url: format!("https://cdn.mindly.dev/{}.mp4", Uuid::new_v4()),
        thumbnail_url: Some("https://cdn.mindly.dev/thumb.jpg".to_string()),
        duration_sec: 60,
        tags: vec!["programming".to_string(), "web".to_string()],
        created_at: Utc::now() - Duration::minutes(minutes_ago),
        moderation_status: status,
    }
}

/// Create a feed entry; larger `minutes_ago` means older
pub fn test_feed_entry(title: &str, status: ModerationStatus, minutes_ago: i64) -> FeedEntry {
    FeedEntry {
        video: test_video(title, status, minutes_ago),
        author: test_author(),
    }
}

/// Create a registered user with default values
pub fn test_user() -> User {
    let now = Utc::now();
    User {
        id: UserId(Uuid::new_v4()),
        email: "existing@mindly.dev".to_string(),
        username: "existing_user".to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        full_name: Some("Existing User".to_string()),
        score: 0,
        current_streak: 0,
        best_streak: 0,
        created_at: now,
        updated_at: now,
    }
}
