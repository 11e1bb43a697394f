//! User domain entity
//!
//! A learner account created through registration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered learner
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: UserId,
    /// Always stored lowercased
    pub email: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub score: i32,
    pub current_streak: i32,
    pub best_streak: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data needed to create a new user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub full_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_never_serializes_password_hash() {
        let user = User {
            id: UserId(Uuid::nil()),
            email: "demo@mindly.dev".to_string(),
            username: "demo_user".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            full_name: None,
            score: 0,
            current_streak: 0,
            best_streak: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("argon2"));
        assert!(!json.contains("full_name"));
        assert!(json.contains("demo_user"));
    }
}
