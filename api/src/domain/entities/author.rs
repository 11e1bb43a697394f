//! Author domain entity
//!
//! An expert who publishes short learning videos to the feed.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserId;

/// Unique identifier for an author
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthorId(pub Uuid);

impl From<Uuid> for AuthorId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AuthorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reputation level of an author, in increasing order of trust
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrustTier {
    #[default]
    Bronze,
    Silver,
    Gold,
}

impl std::fmt::Display for TrustTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrustTier::Bronze => write!(f, "bronze"),
            TrustTier::Silver => write!(f, "silver"),
            TrustTier::Gold => write!(f, "gold"),
        }
    }
}

impl std::str::FromStr for TrustTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bronze" => Ok(TrustTier::Bronze),
            "silver" => Ok(TrustTier::Silver),
            "gold" => Ok(TrustTier::Gold),
            _ => Err(format!("Unknown trust tier: {}", s)),
        }
    }
}

/// Author attribution shown next to every feed video
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub id: AuthorId,
    pub full_name: String,
    /// Free-text area of expertise (e.g. "IT", "Psychology")
    pub expertise_area: String,
    pub trust_tier: TrustTier,
    pub is_verified: bool,
}

/// Data needed to create an author
#[derive(Debug, Clone)]
pub struct NewAuthor {
    /// Account the author profile belongs to, if any
    pub user_id: Option<UserId>,
    pub full_name: String,
    pub expertise_area: String,
    pub trust_tier: TrustTier,
    pub bio: Option<String>,
    pub is_verified: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trust_tier_display() {
        assert_eq!(TrustTier::Bronze.to_string(), "bronze");
        assert_eq!(TrustTier::Silver.to_string(), "silver");
        assert_eq!(TrustTier::Gold.to_string(), "gold");
    }

    #[test]
    fn trust_tier_from_str() {
        assert_eq!("bronze".parse::<TrustTier>().unwrap(), TrustTier::Bronze);
        assert_eq!("SILVER".parse::<TrustTier>().unwrap(), TrustTier::Silver);
        assert_eq!(" Gold ".parse::<TrustTier>().unwrap(), TrustTier::Gold);
        assert!("platinum".parse::<TrustTier>().is_err());
    }

    #[test]
    fn trust_tiers_increase_in_trust() {
        assert!(TrustTier::Bronze < TrustTier::Silver);
        assert!(TrustTier::Silver < TrustTier::Gold);
        assert_eq!(TrustTier::default(), TrustTier::Bronze);
    }

    #[test]
    fn author_serializes_tier_lowercase() {
        let author = Author {
            id: AuthorId(Uuid::nil()),
            full_name: "Dmitry Coder".to_string(),
            expertise_area: "IT".to_string(),
            trust_tier: TrustTier::Gold,
            is_verified: true,
        };

        let json = serde_json::to_value(&author).unwrap();
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["trust_tier"], "gold");
        assert_eq!(json["is_verified"], true);
    }
}
