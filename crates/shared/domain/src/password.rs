//! Password value object - Domain layer password handling.
//!
//! A `Password` held by a `User` always wraps an already-hashed value. The
//! strength rule for raw, pre-hash candidates lives here too, as a stateless
//! check, because only the raw form has a meaningful length.

use crate::constants::{MIN_PASSWORD_LENGTH, REDACTED_PASSWORD};
use crate::error::{DomainError, DomainResult};
use crate::text::is_blank;

/// Hashed password value object.
///
/// Neither `Debug` nor `Display` ever reveal the wrapped value.
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output (security)
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(REDACTED_PASSWORD)
    }
}

impl std::fmt::Display for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(REDACTED_PASSWORD)
    }
}

impl Password {
    /// Wrap an existing hash (fresh from the encoder, or loaded from storage).
    ///
    /// Only presence is checked; a hash has its own length profile.
    ///
    /// # Errors
    /// Returns validation error if the hash is blank.
    pub fn from_hash(hash: impl Into<String>) -> DomainResult<Self> {
        let hash = hash.into();
        if is_blank(&hash) {
            return Err(DomainError::validation("Password is required"));
        }
        Ok(Self { hash })
    }

    /// Check a raw, pre-hash candidate against the strength rule.
    ///
    /// # Errors
    /// Returns validation error if the candidate is blank or shorter than
    /// `MIN_PASSWORD_LENGTH` characters.
    pub fn validate_raw(raw: &str) -> DomainResult<()> {
        if is_blank(raw) {
            return Err(DomainError::validation("Password is required"));
        }

        if raw.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(DomainError::validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        Ok(())
    }

    /// Get the hash string for storage and verification.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }
}
