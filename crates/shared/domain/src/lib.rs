//! Domain layer - Account value objects and the user entity.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Validation happens at construction time, so holding an `Email` or a
//! `Password` means the value already satisfied its rules.

pub mod command;
pub mod constants;
pub mod email;
pub mod error;
pub mod password;
mod text;
pub mod user;

pub use command::{LoginCommand, SignUpCommand};
pub use constants::*;
pub use email::Email;
pub use error::{DomainError, DomainResult};
pub use password::Password;
pub use user::{LoginResponse, SignUpResponse, User, UserId};
