//! Sign-up and login flows against the in-memory store and a real Argon2
//! encoder.

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;

use account_service_lib::config::HashingConfig;
use account_service_lib::encoder::Argon2Encoder;
use account_service_lib::repository::{InMemoryUserRepository, UserRepository};
use account_service_lib::service::{UserManager, UserService};
use common::{AppError, AppResult};
use domain::{Email, LoginCommand, SignUpCommand, User};

fn fast_encoder() -> Arc<Argon2Encoder> {
    Arc::new(
        Argon2Encoder::new(HashingConfig {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        })
        .unwrap(),
    )
}

fn setup() -> (Arc<InMemoryUserRepository>, UserManager) {
    let repo = Arc::new(InMemoryUserRepository::new());
    let service = UserManager::new(repo.clone(), fast_encoder());
    (repo, service)
}

fn sign_up_command(email: &str) -> SignUpCommand {
    SignUpCommand::new(email, "password123", "Korea", "010-1234-5678")
}

#[tokio::test]
async fn test_sign_up_then_login() {
    let (_, service) = setup();

    let signed_up = service
        .sign_up(sign_up_command("test@example.com"))
        .await
        .unwrap();
    assert_eq!(signed_up.id, 1);
    assert_eq!(signed_up.email, "test@example.com");
    assert_eq!(signed_up.country, "Korea");

    let logged_in = service
        .login(LoginCommand::new("test@example.com", "password123"))
        .await
        .unwrap();
    assert_eq!(logged_in.id, signed_up.id);
    assert_eq!(logged_in.email, "test@example.com");
}

#[tokio::test]
async fn test_stored_password_is_hashed() {
    let (repo, service) = setup();
    service
        .sign_up(sign_up_command("hash@example.com"))
        .await
        .unwrap();

    let email = Email::parse("hash@example.com").unwrap();
    let stored = repo.find_by_email(&email).await.unwrap().unwrap();

    assert_ne!(stored.password().as_str(), "password123");
    assert!(stored.password().as_str().starts_with("$argon2id$"));
    assert_eq!(stored.phone_number(), "010-1234-5678");
    assert_eq!(format!("{:?}", stored.password()), "[PROTECTED]");
}

#[tokio::test]
async fn test_second_sign_up_with_same_email_rejected() {
    let (repo, service) = setup();
    service
        .sign_up(sign_up_command("dup@example.com"))
        .await
        .unwrap();

    let err = service
        .sign_up(sign_up_command("dup@example.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::DuplicateEmail));
    assert_eq!(repo.count().await, 1);
}

#[tokio::test]
async fn test_repeated_sign_ups_admit_one() {
    let (repo, service) = setup();
    let service = Arc::new(service);

    let attempts = (0..8).map(|_| {
        let service = service.clone();
        async move { service.sign_up(sign_up_command("race@example.com")).await }
    });
    let results = join_all(attempts).await;

    let successes = results.iter().filter(|r| r.is_ok()).count();
    let duplicates = results
        .iter()
        .filter(|r| matches!(r, Err(AppError::DuplicateEmail)))
        .count();

    assert_eq!(successes, 1);
    assert_eq!(duplicates, 7);
    assert_eq!(repo.count().await, 1);
}

#[tokio::test]
async fn test_login_failures_share_one_message() {
    let (_, service) = setup();
    service
        .sign_up(sign_up_command("test@example.com"))
        .await
        .unwrap();

    let wrong_password = service
        .login(LoginCommand::new("test@example.com", "wrongPassword"))
        .await
        .unwrap_err();
    let unknown_email = service
        .login(LoginCommand::new("nobody@example.com", "password123"))
        .await
        .unwrap_err();

    assert!(matches!(wrong_password, AppError::InvalidCredentials));
    assert!(matches!(unknown_email, AppError::InvalidCredentials));
    assert_eq!(wrong_password.to_string(), unknown_email.to_string());
}

#[tokio::test]
async fn test_invalid_input_stores_nothing() {
    let (repo, service) = setup();

    let bad_email = service.sign_up(sign_up_command("not-an-email")).await;
    let short_password = service
        .sign_up(SignUpCommand::new("ok@example.com", "short", "Korea", "010"))
        .await;

    assert!(matches!(bad_email, Err(AppError::Validation(_))));
    assert!(matches!(short_password, Err(AppError::Validation(_))));
    assert_eq!(repo.count().await, 0);
}

/// Store whose existence check always misses, as when every request reads
/// before any of them has written.
struct StaleExistenceCheck {
    inner: Arc<InMemoryUserRepository>,
}

#[async_trait]
impl UserRepository for StaleExistenceCheck {
    async fn save(&self, user: User) -> AppResult<User> {
        self.inner.save(user).await
    }

    async fn find_by_email(&self, email: &Email) -> AppResult<Option<User>> {
        self.inner.find_by_email(email).await
    }

    async fn exists_by_email(&self, _email: &Email) -> AppResult<bool> {
        Ok(false)
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_store_constraint_rejects_racing_sign_ups() {
    let store = Arc::new(InMemoryUserRepository::new());
    let repo = Arc::new(StaleExistenceCheck {
        inner: store.clone(),
    });
    let service = Arc::new(UserManager::new(repo, fast_encoder()));

    let handles = (0..8).map(|_| {
        let service = service.clone();
        tokio::spawn(async move { service.sign_up(sign_up_command("race@example.com")).await })
    });
    let results: Vec<_> = join_all(handles)
        .await
        .into_iter()
        .map(|joined| joined.unwrap())
        .collect();

    let successes = results.iter().filter(|r| r.is_ok()).count();
    let duplicates = results
        .iter()
        .filter(|r| matches!(r, Err(AppError::DuplicateEmail)))
        .count();

    assert_eq!(successes, 1);
    assert_eq!(duplicates, 7);
    assert_eq!(store.count().await, 1);
}
