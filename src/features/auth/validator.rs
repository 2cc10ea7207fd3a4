use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::model::AuthSession;
use super::token::token_digest;
use crate::core::error::AppError;
use crate::features::accounts::models::Account;

/// Resolves presented bearer tokens against the session store.
///
/// Tokens are stored as SHA-256 digests, so validation hashes the presented
/// value and looks the digest up together with the owning account.
pub struct TokenValidator {
    pool: PgPool,
}

#[derive(FromRow)]
struct SessionRow {
    token_id: Uuid,
    #[sqlx(flatten)]
    account: Account,
}

impl TokenValidator {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn validate_token(&self, token: &str) -> Result<AuthSession, AppError> {
        let digest = token_digest(token);

        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT t.id AS token_id,
                   a.id, a.name, a.email, a.password_hash, a.age, a.created_at, a.updated_at
            FROM auth_tokens t
            JOIN accounts a ON a.id = t.account_id
            WHERE t.token_hash = $1
            "#,
        )
        .bind(&digest)
        .fetch_optional(&self.pool)
        .await?;

        let row = row.ok_or_else(|| AppError::Unauthorized("Invalid token".to_string()))?;

        Ok(AuthSession {
            account: row.account,
            token_id: row.token_id,
        })
    }
}
