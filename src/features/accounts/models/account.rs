use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::accounts::dtos::AccountResponseDto;

/// Database model for an account.
///
/// The avatar blob lives in the same row but is deliberately not part of this
/// struct: sessions carry an `Account` on every authenticated request and the
/// blob is only ever needed by the avatar endpoints, which query it directly.
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub age: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Account> for AccountResponseDto {
    fn from(a: Account) -> Self {
        Self {
            id: a.id,
            name: a.name,
            email: a.email,
            age: a.age,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}
