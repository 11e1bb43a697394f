//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod auth;
pub mod feed;

pub use auth::register;
pub use feed::get_feed;
