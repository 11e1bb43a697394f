//! Feed handlers
//!
//! Serves the single-page learning feed.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

use crate::domain::entities::FeedEntry;
use crate::error::AppError;
use crate::AppState;

/// Requester recorded when the caller does not identify itself
pub const ANONYMOUS_REQUESTER: &str = "anonymous";

/// Query string for GET /api/feed
///
/// Values are kept as text so a non-numeric `limit` falls back to the default
/// page size instead of rejecting the request. A repeated key keeps its first
/// value.
#[derive(Debug, Default)]
pub struct FeedQuery {
    pub user_id: Option<String>,
    pub limit: Option<String>,
}

impl FeedQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = FeedQuery::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "user_id" => &mut query.user_id,
                "limit" => &mut query.limit,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }

    pub fn requested_limit(&self) -> Option<i64> {
        self.limit.as_deref().and_then(|raw| raw.trim().parse().ok())
    }

    pub fn requester_id(&self) -> &str {
        match self.user_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => id,
            _ => ANONYMOUS_REQUESTER,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FeedResponse {
    pub success: bool,
    pub data: Vec<FeedEntry>,
    pub count: usize,
}

/// GET /api/feed?user_id=&limit=
///
/// Most recent approved videos with their authors, newest first.
pub async fn get_feed(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<FeedResponse>, AppError> {
    let query = FeedQuery::from_pairs(pairs);
    let feed = state
        .feed_service
        .get_feed(query.requester_id(), query.requested_limit())
        .await?;

    Ok(Json(FeedResponse {
        success: true,
        count: feed.count,
        data: feed.entries,
    }))
}
