//! Use-case inputs for the account service.
//!
//! Commands carry raw, unvalidated caller input. The raw password is
//! redacted from `Debug` output.

use crate::constants::REDACTED_PASSWORD;

/// Sign-up request data
#[derive(Clone)]
pub struct SignUpCommand {
    pub email: String,
    pub raw_password: String,
    pub country: String,
    pub phone_number: String,
}

impl SignUpCommand {
    pub fn new(
        email: impl Into<String>,
        raw_password: impl Into<String>,
        country: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            raw_password: raw_password.into(),
            country: country.into(),
            phone_number: phone_number.into(),
        }
    }
}

impl std::fmt::Debug for SignUpCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignUpCommand")
            .field("email", &self.email)
            .field("raw_password", &REDACTED_PASSWORD)
            .field("country", &self.country)
            .field("phone_number", &self.phone_number)
            .finish()
    }
}

/// Login request data
#[derive(Clone)]
pub struct LoginCommand {
    pub email: String,
    pub raw_password: String,
}

impl LoginCommand {
    pub fn new(email: impl Into<String>, raw_password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            raw_password: raw_password.into(),
        }
    }
}

impl std::fmt::Debug for LoginCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCommand")
            .field("email", &self.email)
            .field("raw_password", &REDACTED_PASSWORD)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_raw_password() {
        let sign_up = SignUpCommand::new("test@example.com", "password123", "Korea", "010");
        let login = LoginCommand::new("test@example.com", "password123");

        assert!(!format!("{:?}", sign_up).contains("password123"));
        assert!(!format!("{:?}", login).contains("password123"));
        assert!(format!("{:?}", login).contains("test@example.com"));
    }
}
