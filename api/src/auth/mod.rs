//! Credential handling

pub mod password;

pub use password::hash_password;
#[allow(unused_imports)]
pub use password::verify_password;
