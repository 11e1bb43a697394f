//! Video domain entity
//!
//! A short learning video and the feed entry that pairs it with its author.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Author, AuthorId};

/// Unique identifier for a video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VideoId(pub Uuid);

impl From<Uuid> for VideoId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Moderation state gating public visibility.
/// Only `Approved` videos are eligible for the feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl std::fmt::Display for ModerationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModerationStatus::Pending => write!(f, "pending"),
            ModerationStatus::Approved => write!(f, "approved"),
            ModerationStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for ModerationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(ModerationStatus::Pending),
            "approved" => Ok(ModerationStatus::Approved),
            "rejected" => Ok(ModerationStatus::Rejected),
            _ => Err(format!("Unknown moderation status: {}", s)),
        }
    }
}

/// A short learning video
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Video {
    pub id: VideoId,
    pub title: String,
    pub description: String,
    pub video_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    pub duration_sec: u32,
    /// Tags in storage order; empty when the video has none
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing)]
    pub moderation_status: ModerationStatus,
}

impl Video {
    /// Whether this video may be shown in the public feed
    pub fn is_feed_eligible(&self) -> bool {
        self.moderation_status == ModerationStatus::Approved
    }
}

/// A feed item: a video with its owning author.
///
/// Serialized with the video fields at the top level and the author nested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedEntry {
    #[serde(flatten)]
    pub video: Video,
    pub author: Author,
}

/// Data needed to publish a new video
#[derive(Debug, Clone)]
pub struct NewVideo {
    pub author_id: AuthorId,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub duration_sec: u32,
    pub tags: Vec<String>,
    pub moderation_status: ModerationStatus,
}
