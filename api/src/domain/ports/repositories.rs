//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{FeedEntry, NewUser, User};
use crate::error::{DomainError, FeedError};

/// Read access to videos for feed assembly
#[async_trait]
pub trait VideoRepository: Send + Sync {
    /// Newest approved videos joined with their authors, newest first,
    /// at most `limit` entries.
    ///
    /// Fails as a whole: a row that cannot be mapped aborts the call.
    async fn find_approved_with_authors(&self, limit: u64) -> Result<Vec<FeedEntry>, FeedError>;
}

/// Repository for User entities
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Check whether the email or the username is already taken
    async fn exists_by_email_or_username(
        &self,
        email: &str,
        username: &str,
    ) -> Result<bool, DomainError>;

    /// Find a user by (lowercased) email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Create a new user with zeroed score and streaks
    async fn create(&self, user: &NewUser) -> Result<User, DomainError>;
}
