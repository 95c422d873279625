//! Password encoder - one-way hashing of raw passwords.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use common::{AppError, AppResult};

use crate::config::HashingConfig;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Password hashing contract.
///
/// Implementations must be one-way: `encode` output can only be checked with
/// `matches`, never reversed.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait PasswordEncoder: Send + Sync {
    /// Hash a raw password.
    fn encode(&self, raw: &str) -> AppResult<String>;

    /// Check a raw password against a stored hash.
    fn matches(&self, raw: &str, hashed: &str) -> bool;
}

/// Argon2id encoder producing PHC strings with a random salt per hash.
#[derive(Clone, Default)]
pub struct Argon2Encoder {
    params: Params,
}

impl Argon2Encoder {
    /// Create an encoder with the given cost parameters.
    ///
    /// # Errors
    /// Returns an internal error if the parameters are out of Argon2's range.
    pub fn new(config: HashingConfig) -> AppResult<Self> {
        let params = Params::new(
            config.memory_kib,
            config.iterations,
            config.parallelism,
            None,
        )
        .map_err(|e| AppError::internal(format!("Invalid Argon2 parameters: {}", e)))?;

        Ok(Self { params })
    }

    #[inline]
    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl PasswordEncoder for Argon2Encoder {
    fn encode(&self, raw: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()
            .hash_password(raw.as_bytes(), &salt)
            .map_err(|e| {
                tracing::error!(error = %e, "argon2 hash_password error");
                AppError::internal(format!("Password hash failed: {}", e))
            })?;
        Ok(hash.to_string())
    }

    fn matches(&self, raw: &str, hashed: &str) -> bool {
        let parsed = match PasswordHash::new(hashed) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(error = %e, "stored password hash is not a valid PHC string");
                return false;
            }
        };

        // Cost parameters come from the stored hash, not from `self.params`
        self.argon2()
            .verify_password(raw.as_bytes(), &parsed)
            .is_ok()
    }
}
