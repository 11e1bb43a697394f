//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::domain::entities::{FeedEntry, NewUser, User, UserId};
use crate::domain::ports::{UserRepository, VideoRepository};
use crate::error::{DomainError, FeedError};

// ============================================================================
// In-Memory Video Repository
// ============================================================================

#[derive(Clone, Default)]
pub struct InMemoryVideoRepository {
    entries: Arc<RwLock<Vec<FeedEntry>>>,
    requested_limits: Arc<RwLock<Vec<u64>>>,
    fail: bool,
}

impl InMemoryVideoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every query fails as if the database were down
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Pre-populate with a feed entry in any moderation state
    pub fn with_entry(self, entry: FeedEntry) -> Self {
        self.entries.write().unwrap().push(entry);
        self
    }

    /// Limits passed to the repository, in call order
    pub fn requested_limits(&self) -> Vec<u64> {
        self.requested_limits.read().unwrap().clone()
    }
}

#[async_trait]
impl VideoRepository for InMemoryVideoRepository {
    async fn find_approved_with_authors(&self, limit: u64) -> Result<Vec<FeedEntry>, FeedError> {
        self.requested_limits.write().unwrap().push(limit);

        if self.fail {
            return Err(FeedError::StorageUnavailable(
                "connection refused".to_string(),
            ));
        }

        let entries = self.entries.read().unwrap();
        let mut approved: Vec<FeedEntry> = entries
            .iter()
            .filter(|e| e.video.is_feed_eligible())
            .cloned()
            .collect();
        approved.sort_by(|a, b| b.video.created_at.cmp(&a.video.created_at));
        approved.truncate(limit as usize);

        Ok(approved)
    }
}

// ============================================================================
// In-Memory User Repository
// ============================================================================

#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
    fail: bool,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Pre-populate with a user for testing
    pub fn with_user(self, user: User) -> Self {
        self.users.write().unwrap().push(user);
        self
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.fail {
            Err(DomainError::Database("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn exists_by_email_or_username(
        &self,
        email: &str,
        username: &str,
    ) -> Result<bool, DomainError> {
        self.check()?;
        let users = self.users.read().unwrap();
        Ok(users
            .iter()
            .any(|u| u.email == email || u.username == username))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.check()?;
        let users = self.users.read().unwrap();
        Ok(users
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create(&self, user: &NewUser) -> Result<User, DomainError> {
        self.check()?;
        let mut users = self.users.write().unwrap();

        if users
            .iter()
            .any(|u| u.email == user.email || u.username == user.username)
        {
            return Err(DomainError::AlreadyExists(format!(
                "user {} already exists",
                user.username
            )));
        }

        let now = Utc::now();
        let created = User {
            id: UserId(Uuid::new_v4()),
            email: user.email.clone(),
            username: user.username.clone(),
            password_hash: user.password_hash.clone(),
            full_name: user.full_name.clone(),
            score: 0,
            current_streak: 0,
            best_streak: 0,
            created_at: now,
            updated_at: now,
        };
        users.push(created.clone());

        Ok(created)
    }
}
