//! User repository contract and its SeaORM implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, Set, SqlErr,
};

use common::{AppError, AppResult};
use domain::{Email, User};

use super::entities::{user, UserActiveModel, UserEntity, UserModel};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Email uniqueness is enforced here, by the storage layer. Callers may
/// pre-check with `exists_by_email`, but only `save` is authoritative: a
/// conflicting write fails with `AppError::DuplicateEmail`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a user and return it with its identifier populated.
    ///
    /// Users without an identifier are inserted; users with one are updated.
    async fn save(&self, user: User) -> AppResult<User>;

    /// Find a user by email address
    async fn find_by_email(&self, email: &Email) -> AppResult<Option<User>>;

    /// Check whether any user holds this email address
    async fn exists_by_email(&self, email: &Email) -> AppResult<bool>;
}

/// PostgreSQL-backed implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn save(&self, user: User) -> AppResult<User> {
        let mut active_model = UserActiveModel {
            id: NotSet,
            email: Set(user.email().as_str().to_owned()),
            password_hash: Set(user.password().as_str().to_owned()),
            country: Set(user.country().to_owned()),
            phone_number: Set(user.phone_number().to_owned()),
            created_at: NotSet,
        };

        let model = match user.id() {
            Some(id) => {
                active_model.id = Set(id);
                active_model.update(&self.db).await
            }
            None => {
                active_model.created_at = Set(chrono::Utc::now());
                active_model.insert(&self.db).await
            }
        }
        .map_err(translate_write_error)?;

        tracing::debug!(user_id = model.id, "user row written");
        into_domain(model)
    }

    async fn find_by_email(&self, email: &Email) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email.as_str()))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        result.map(into_domain).transpose()
    }

    async fn exists_by_email(&self, email: &Email) -> AppResult<bool> {
        let count = UserEntity::find()
            .filter(user::Column::Email.eq(email.as_str()))
            .count(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(count > 0)
    }
}

/// Map a write failure, turning the email unique constraint into
/// `DuplicateEmail`.
fn translate_write_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::warn!(%detail, "unique constraint rejected user write");
            AppError::DuplicateEmail
        }
        _ => AppError::from(err),
    }
}

fn into_domain(model: UserModel) -> AppResult<User> {
    let id = model.id;
    User::try_from(model)
        .map_err(|e| AppError::internal(format!("Stored user {} is invalid: {}", id, e)))
}
