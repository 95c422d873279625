//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Validation
// =============================================================================

/// Minimum length of a raw (pre-hash) password, in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Accepted email grammar: `local@domain.tld` with a 2+ letter top-level label
pub const EMAIL_PATTERN: &str = r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";

// =============================================================================
// Presentation
// =============================================================================

/// Rendered in place of any password value
pub const REDACTED_PASSWORD: &str = "[PROTECTED]";

// =============================================================================
// Messages
// =============================================================================

/// Returned for duplicate sign-ups
pub const DUPLICATE_EMAIL_MESSAGE: &str = "Email already in use";

/// Returned for every failed login, whatever the cause
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Email or password is incorrect";
