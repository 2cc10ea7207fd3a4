use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::accounts::models::Account;
use crate::features::auth::dtos::LoginDto;
use crate::features::auth::model::AuthSession;
use crate::features::auth::password::verify_password;
use crate::features::auth::token::{generate_token, token_digest};

/// Service for session lifecycle: credential login, token issuance and
/// revocation.
pub struct SessionService {
    pool: PgPool,
}

impl SessionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Verify credentials and open a new session.
    ///
    /// Every failure mode, unknown email, wrong password or a store error,
    /// collapses into [`AppError::LoginFailed`] so the response carries no
    /// detail about which check failed.
    pub async fn login(&self, dto: LoginDto) -> Result<(Account, String)> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, name, email, password_hash, age, created_at, updated_at
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(&dto.email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Credential lookup failed: {:?}", e);
            AppError::LoginFailed
        })?
        .ok_or(AppError::LoginFailed)?;

        if !verify_password(&dto.password, &account.password_hash) {
            return Err(AppError::LoginFailed);
        }

        let token = self.issue_token(account.id).await.map_err(|e| {
            tracing::error!("Token issuance failed during login: {:?}", e);
            AppError::LoginFailed
        })?;

        tracing::info!("Session opened: account_id={}", account.id);

        Ok((account, token))
    }

    /// Issue a fresh session token for the account. The plaintext token is
    /// returned to the caller; only its digest is persisted.
    pub async fn issue_token(&self, account_id: Uuid) -> Result<String> {
        let token = generate_token();

        sqlx::query(
            r#"
            INSERT INTO auth_tokens (account_id, token_hash)
            VALUES ($1, $2)
            "#,
        )
        .bind(account_id)
        .bind(token_digest(&token))
        .execute(&self.pool)
        .await?;

        Ok(token)
    }

    /// Revoke exactly the presenting session token. Other sessions of the
    /// same account stay valid.
    pub async fn logout(&self, session: &AuthSession) -> Result<()> {
        sqlx::query("DELETE FROM auth_tokens WHERE id = $1")
            .bind(session.token_id)
            .execute(&self.pool)
            .await?;

        tracing::info!(
            "Session closed: account_id={}, token_id={}",
            session.account.id,
            session.token_id
        );

        Ok(())
    }

    /// Revoke every session of the account except the presenting one.
    ///
    /// Deliberately spares the current token: the caller stays logged in on
    /// this device after kicking the others.
    pub async fn logout_all(&self, session: &AuthSession) -> Result<()> {
        let result = sqlx::query("DELETE FROM auth_tokens WHERE account_id = $1 AND id <> $2")
            .bind(session.account.id)
            .bind(session.token_id)
            .execute(&self.pool)
            .await?;

        tracing::info!(
            "Revoked {} other session(s): account_id={}",
            result.rows_affected(),
            session.account.id
        );

        Ok(())
    }
}
