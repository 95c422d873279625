//! Email value object.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};

use crate::constants::EMAIL_PATTERN;
use crate::error::{DomainError, DomainResult};
use crate::text::is_blank;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// A syntactically valid email address.
///
/// The wrapped string is kept exactly as given: no trimming, no case folding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Parse and validate an email address.
    ///
    /// # Errors
    /// Returns a validation error if the value is blank or does not match
    /// the `local@domain.tld` grammar.
    pub fn parse(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();

        if is_blank(&value) {
            return Err(DomainError::validation("Email is required"));
        }

        if !EMAIL_RE.is_match(&value) {
            return Err(DomainError::validation(format!(
                "Invalid email format: {}",
                value
            )));
        }

        Ok(Self(value))
    }

    /// Borrow the address.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the address.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl Serialize for Email {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails_round_trip() {
        for raw in [
            "test@example.com",
            "first.last@sub.domain.org",
            "user+tag@example.co",
            "a_b-c@my-host.io",
            "UPPER@EXAMPLE.COM",
        ] {
            let email = Email::parse(raw).unwrap();
            assert_eq!(email.as_str(), raw);
            assert_eq!(email.to_string(), raw);
        }
    }

    #[test]
    fn test_blank_email_rejected() {
        for raw in ["", " ", "\t\n"] {
            let err = Email::parse(raw).unwrap_err();
            assert_eq!(err, DomainError::validation("Email is required"));
        }
    }

    #[test]
    fn test_no_break_space_is_malformed_not_missing() {
        let err = Email::parse("\u{a0}").unwrap_err();
        assert_eq!(err, DomainError::validation("Invalid email format: \u{a0}"));
    }

    #[test]
    fn test_malformed_emails_rejected() {
        for raw in [
            "plainaddress",
            "@example.com",
            "user@",
            "user@example",
            "user@example.c",
            "user@example.c0m",
            "user name@example.com",
            " test@example.com",
            "test@example.com ",
            "user@@example.com",
            "user!@example.com",
        ] {
            let result = Email::parse(raw);
            assert!(
                matches!(result, Err(DomainError::Validation(_))),
                "expected {raw:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_error_message_mentions_value() {
        let err = Email::parse("nope").unwrap_err();
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_equality_is_by_value() {
        assert_eq!(
            Email::parse("a@example.com").unwrap(),
            Email::parse("a@example.com").unwrap()
        );
        assert_ne!(
            Email::parse("a@example.com").unwrap(),
            Email::parse("b@example.com").unwrap()
        );
    }
}
