//! PostgreSQL adapter for UserRepository

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, Set, SqlErr,
};
use uuid::Uuid;

use crate::domain::entities::{NewUser, User, UserId};
use crate::domain::ports::UserRepository;
use crate::entity::users;
use crate::error::DomainError;

/// PostgreSQL implementation of UserRepository
pub struct PostgresUserRepository {
    db: Arc<DatabaseConnection>,
}

impl PostgresUserRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn exists_by_email_or_username(
        &self,
        email: &str,
        username: &str,
    ) -> Result<bool, DomainError> {
        let count = users::Entity::find()
            .filter(
                Condition::any()
                    .add(users::Column::Email.eq(email))
                    .add(users::Column::Username.eq(username)),
            )
            .count(&*self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(count > 0)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let result = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn create(&self, user: &NewUser) -> Result<User, DomainError> {
        let now = Utc::now().fixed_offset();

        let model = users::ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(user.email.clone()),
            username: Set(user.username.clone()),
            password_hash: Set(user.password_hash.clone()),
            full_name: Set(user.full_name.clone()),
            score: Set(0),
            current_streak: Set(0),
            best_streak: Set(0),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(insert_error)?;

        Ok(result.into())
    }
}

/// A unique violation means a concurrent registration won the race
fn insert_error(err: DbErr) -> DomainError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => DomainError::AlreadyExists(msg),
        _ => DomainError::Database(err.to_string()),
    }
}

/// Convert SeaORM model to domain entity
impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        User {
            id: UserId(model.id),
            email: model.email,
            username: model.username,
            password_hash: model.password_hash,
            full_name: model.full_name,
            score: model.score,
            current_streak: model.current_streak,
            best_streak: model.best_streak,
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
