//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod text_array;
pub mod user_repo;
pub mod video_repo;


pub use text_array::parse_text_array;
pub use user_repo::PostgresUserRepository;
pub use video_repo::PostgresVideoRepository;
