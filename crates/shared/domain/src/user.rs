//! User domain entity and related types.

use serde::{Deserialize, Serialize};

use crate::email::Email;
use crate::password::Password;

/// Storage-assigned user identifier
pub type UserId = i64;

/// User domain entity.
///
/// Immutable once built: a changed user is a new instance. The identifier is
/// absent until the repository has persisted the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: Option<UserId>,
    email: Email,
    password: Password,
    country: String,
    phone_number: String,
}

impl User {
    /// Create a user that has not been persisted yet.
    pub fn create_new(
        email: Email,
        password: Password,
        country: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            email,
            password,
            country: country.into(),
            phone_number: phone_number.into(),
        }
    }

    /// Rebuild a user from persisted data.
    pub fn reconstitute(
        id: UserId,
        email: Email,
        password: Password,
        country: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id),
            email,
            password,
            country: country.into(),
            phone_number: phone_number.into(),
        }
    }

    pub fn id(&self) -> Option<UserId> {
        self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    /// The hashed password.
    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Check if the user has been persisted
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// Sign-up response (safe to return to client).
///
/// Phone number and password are stored but never echoed back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SignUpResponse {
    /// Storage-assigned identifier
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: UserId,
    /// Registered email address
    #[cfg_attr(feature = "openapi", schema(example = "test@example.com"))]
    pub email: String,
    /// Country given at sign-up
    #[cfg_attr(feature = "openapi", schema(example = "Korea"))]
    pub country: String,
}

/// Login response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LoginResponse {
    /// Storage-assigned identifier
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: UserId,
    /// Email address used to log in
    #[cfg_attr(feature = "openapi", schema(example = "test@example.com"))]
    pub email: String,
}
