//! In-memory user store for local development and tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use common::{AppError, AppResult};
use domain::{Email, User, UserId};

use super::UserRepository;

#[derive(Default)]
struct Inner {
    by_email: HashMap<String, User>,
    next_id: UserId,
}

/// `UserRepository` backed by a map keyed on email.
///
/// The uniqueness check and the insert happen under one write lock, so
/// concurrent saves of the same email admit exactly one.
#[derive(Default)]
pub struct InMemoryUserRepository {
    inner: RwLock<Inner>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    pub async fn count(&self) -> usize {
        self.inner.read().await.by_email.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: User) -> AppResult<User> {
        let mut inner = self.inner.write().await;
        let key = user.email().as_str().to_owned();

        let id = match user.id() {
            Some(id) => {
                // Only ids this store handed out can be updated
                let Some(current_key) = inner
                    .by_email
                    .iter()
                    .find(|(_, stored)| stored.id() == Some(id))
                    .map(|(email, _)| email.clone())
                else {
                    return Err(AppError::storage(format!("User {} not found", id)));
                };

                if current_key != key && inner.by_email.contains_key(&key) {
                    return Err(AppError::DuplicateEmail);
                }
                inner.by_email.remove(&current_key);
                id
            }
            None => {
                if inner.by_email.contains_key(&key) {
                    return Err(AppError::DuplicateEmail);
                }
                inner.next_id += 1;
                inner.next_id
            }
        };

        let stored = User::reconstitute(
            id,
            user.email().clone(),
            user.password().clone(),
            user.country(),
            user.phone_number(),
        );
        inner.by_email.insert(key, stored.clone());

        Ok(stored)
    }

    async fn find_by_email(&self, email: &Email) -> AppResult<Option<User>> {
        Ok(self.inner.read().await.by_email.get(email.as_str()).cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AppResult<bool> {
        Ok(self.inner.read().await.by_email.contains_key(email.as_str()))
    }
}
