//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod author;
pub mod quiz;
pub mod user;
pub mod video;

pub use author::{Author, AuthorId, NewAuthor, TrustTier};
pub use quiz::Quiz;
pub use user::{NewUser, User, UserId};
pub use video::{FeedEntry, ModerationStatus, NewVideo, Video, VideoId};
