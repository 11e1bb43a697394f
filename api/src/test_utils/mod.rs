//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Why manual mocks instead of mockall?
//! - mockall has lifetime issues with traits containing `&str` parameters
//! - Manual mocks are more explicit and easier to debug
//! - Clones share state, so a test can keep a handle and inspect what the
//!   service did after handing the mock over

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
