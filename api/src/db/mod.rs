//! Database schema contract and demo data
//!
//! - `schema`: versioned DDL that the binary expects
//! - `seed`: demo users, authors, videos and quizzes

pub mod schema;
pub mod seed;

pub use schema::apply_schema;
