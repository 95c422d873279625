//! User service - sign-up and login.
//!
//! Holds only shared handles to its collaborators, so one instance can serve
//! any number of concurrent requests.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument, warn};

use common::{AppError, AppResult};
use domain::{
    Email, LoginCommand, LoginResponse, Password, SignUpCommand, SignUpResponse, User,
};

use crate::encoder::PasswordEncoder;
use crate::repository::UserRepository;

/// Account use cases.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a new account.
    ///
    /// Fails with `Validation` for a malformed email or weak password and
    /// with `DuplicateEmail` when the address is taken. Nothing is stored
    /// unless every check passed.
    async fn sign_up(&self, command: SignUpCommand) -> AppResult<SignUpResponse>;

    /// Check credentials.
    ///
    /// An unknown email and a wrong password both fail with
    /// `InvalidCredentials`.
    async fn login(&self, command: LoginCommand) -> AppResult<LoginResponse>;
}

/// `UserService` over a repository and a password encoder.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
    encoder: Arc<dyn PasswordEncoder>,
}

impl UserManager {
    pub fn new(repo: Arc<dyn UserRepository>, encoder: Arc<dyn PasswordEncoder>) -> Self {
        Self { repo, encoder }
    }
}

#[async_trait]
impl UserService for UserManager {
    #[instrument(skip(self, command))]
    async fn sign_up(&self, command: SignUpCommand) -> AppResult<SignUpResponse> {
        let email = Email::parse(command.email)?;
        Password::validate_raw(&command.raw_password)?;

        // Fast path only; the store's unique constraint still decides races
        if self.repo.exists_by_email(&email).await? {
            warn!(email = %email, "sign-up with registered email");
            return Err(AppError::DuplicateEmail);
        }

        let hash = self.encoder.encode(&command.raw_password)?;
        let user = User::create_new(
            email,
            Password::from_hash(hash)?,
            command.country,
            command.phone_number,
        );

        let saved = self.repo.save(user).await?;
        let id = saved
            .id()
            .ok_or_else(|| AppError::storage("Saved user has no identifier"))?;

        info!(user_id = id, email = %saved.email(), "user signed up");

        Ok(SignUpResponse {
            id,
            email: saved.email().to_string(),
            country: saved.country().to_owned(),
        })
    }

    #[instrument(skip(self, command))]
    async fn login(&self, command: LoginCommand) -> AppResult<LoginResponse> {
        let email = Email::parse(command.email)?;

        let Some(user) = self.repo.find_by_email(&email).await? else {
            warn!(email = %email, "login unknown email");
            return Err(AppError::InvalidCredentials);
        };

        if !self
            .encoder
            .matches(&command.raw_password, user.password().as_str())
        {
            warn!(email = %email, user_id = ?user.id(), "login invalid password");
            return Err(AppError::InvalidCredentials);
        }

        let id = user
            .id()
            .ok_or_else(|| AppError::storage("Stored user has no identifier"))?;

        info!(user_id = id, "user logged in");

        Ok(LoginResponse {
            id,
            email: user.email().to_string(),
        })
    }
}
