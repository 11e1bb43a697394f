//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod feed_service;
pub mod user_service;

pub use feed_service::FeedService;
pub use user_service::{RegisterUser, UserService};
