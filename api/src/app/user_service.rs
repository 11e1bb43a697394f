//! User service
//!
//! Handles learner registration.

use std::sync::Arc;

use crate::auth::hash_password;
use crate::domain::entities::{NewUser, User};
use crate::domain::ports::UserRepository;
use crate::error::{AppError, DomainError};

const MIN_USERNAME_LEN: usize = 3;
const MAX_USERNAME_LEN: usize = 50;
const MIN_PASSWORD_LEN: usize = 6;

/// Registration input as submitted by the client
#[derive(Debug, Clone)]
pub struct RegisterUser {
    pub email: String,
    pub username: String,
    pub password: String,
    pub full_name: Option<String>,
}

/// Service for managing users
pub struct UserService<UR>
where
    UR: UserRepository + ?Sized,
{
    users: Arc<UR>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository + ?Sized,
{
    pub fn new(users: Arc<UR>) -> Self {
        Self { users }
    }

    /// Register a new user
    ///
    /// Validates the input, rejects a taken email or username, hashes the
    /// password and stores the account with a zeroed score.
    pub async fn register(&self, request: RegisterUser) -> Result<User, AppError> {
        validate_registration(&request)?;

        let email = request.email.trim().to_lowercase();

        if self
            .users
            .exists_by_email_or_username(&email, &request.username)
            .await?
        {
            return Err(AppError::Domain(DomainError::AlreadyExists(
                "User with this email or username already exists".to_string(),
            )));
        }

        let password_hash = hash_password(&request.password)?;

        let user = self
            .users
            .create(&NewUser {
                email,
                username: request.username,
                password_hash,
                full_name: request.full_name,
            })
            .await?;

        tracing::info!(user_id = %user.id, username = %user.username, "User registered");

        Ok(user)
    }
}

/// Check registration input before touching storage
fn validate_registration(request: &RegisterUser) -> Result<(), DomainError> {
    let email = request.email.trim();
    if email.is_empty() {
        return Err(DomainError::Validation("email is required".to_string()));
    }
    if !email.contains('@') || !email.contains('.') {
        return Err(DomainError::Validation("invalid email format".to_string()));
    }

    if request.username.trim().is_empty() {
        return Err(DomainError::Validation("username is required".to_string()));
    }
    let username_len = request.username.chars().count();
    if username_len < MIN_USERNAME_LEN {
        return Err(DomainError::Validation(format!(
            "username must be at least {} characters",
            MIN_USERNAME_LEN
        )));
    }
    if username_len > MAX_USERNAME_LEN {
        return Err(DomainError::Validation(format!(
            "username must be at most {} characters",
            MAX_USERNAME_LEN
        )));
    }

    if request.password.trim().is_empty() {
        return Err(DomainError::Validation("password is required".to_string()));
    }
    if request.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(DomainError::Validation(format!(
            "password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }

    Ok(())
}
