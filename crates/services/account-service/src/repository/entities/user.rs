//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{DomainError, Email, Password, User};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub country: String,
    pub phone_number: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Rehydrate a domain user from a stored row.
///
/// Rows are re-validated, so a corrupted email or empty hash surfaces as an
/// error instead of a half-valid `User`.
impl TryFrom<Model> for User {
    type Error = DomainError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(User::reconstitute(
            model.id,
            Email::parse(model.email)?,
            Password::from_hash(model.password_hash)?,
            model.country,
            model.phone_number,
        ))
    }
}
