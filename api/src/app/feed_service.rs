//! Feed service
//!
//! Assembles the "latest N" learning feed: approved videos with their
//! authors, newest first. There is a single page; no offset or cursor.

use std::sync::Arc;

use crate::domain::entities::FeedEntry;
use crate::domain::ports::VideoRepository;
use crate::error::FeedError;

/// Page size when the caller asks for nothing usable
pub const DEFAULT_FEED_LIMIT: u64 = 10;

/// Upper bound on a single feed page
pub const MAX_FEED_LIMIT: u64 = 50;

/// Resolved number of entries to request from storage.
/// Always within `1..=MAX_FEED_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedLimit(u64);

impl FeedLimit {
    /// Apply the limit policy: absent, zero or negative falls back to the
    /// default; anything above the maximum is clamped.
    pub fn resolve(requested: Option<i64>) -> Self {
        match requested {
            Some(n) if n > 0 => Self((n as u64).min(MAX_FEED_LIMIT)),
            _ => Self(DEFAULT_FEED_LIMIT),
        }
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl Default for FeedLimit {
    fn default() -> Self {
        Self(DEFAULT_FEED_LIMIT)
    }
}

/// An assembled feed page
#[derive(Debug, Clone)]
pub struct Feed {
    /// Entries ordered by descending creation time
    pub entries: Vec<FeedEntry>,
    pub count: usize,
}

/// Service for assembling feeds
pub struct FeedService<VR>
where
    VR: VideoRepository + ?Sized,
{
    videos: Arc<VR>,
}

impl<VR> FeedService<VR>
where
    VR: VideoRepository + ?Sized,
{
    pub fn new(videos: Arc<VR>) -> Self {
        Self { videos }
    }

    /// Get the latest approved videos for a requester.
    ///
    /// `requester_id` is reserved for future ranking and exclusion; it does
    /// not affect the result today. Storage failures are returned as-is,
    /// never retried and never paired with partial entries.
    pub async fn get_feed(
        &self,
        _requester_id: &str,
        limit: Option<i64>,
    ) -> Result<Feed, FeedError> {
        let limit = FeedLimit::resolve(limit);
        let entries = self.videos.find_approved_with_authors(limit.get()).await?;
        let count = entries.len();

        Ok(Feed { entries, count })
    }
}
