use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::accounts::dtos::{RegisterAccountDto, UpdateAccountDto};
use crate::features::accounts::models::Account;
use crate::features::auth::password::hash_password;

/// Service for account records: registration, profile updates, deletion.
pub struct AccountService {
    pool: PgPool,
}

impl AccountService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create an account from a validated registration body.
    ///
    /// Every store failure on this path answers 400: the registration
    /// contract maps persistence errors to a client error, duplicate email
    /// included.
    pub async fn register(&self, dto: RegisterAccountDto) -> Result<Account> {
        let password_hash = hash_password(&dto.password)?;

        let account = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (name, email, password_hash, age)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, password_hash, age, created_at, updated_at
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(&password_hash)
        .bind(dto.age)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Validation("Email already registered".to_string())
            } else {
                tracing::error!("Failed to insert account: {:?}", e);
                AppError::BadRequest("Could not create account".to_string())
            }
        })?;

        tracing::info!("Account registered: id={}, email={}", account.id, account.email);

        Ok(account)
    }

    /// Apply a profile update. The caller has already checked the body keys
    /// against the allow-list; password values are re-hashed here.
    pub async fn update(&self, account_id: Uuid, dto: UpdateAccountDto) -> Result<Account> {
        let password_hash = match &dto.password {
            Some(password) => Some(hash_password(password)?),
            None => None,
        };

        let account = sqlx::query_as::<_, Account>(
            r#"
            UPDATE accounts
            SET name = COALESCE($2, name),
                email = COALESCE($3, email),
                age = COALESCE($4, age),
                password_hash = COALESCE($5, password_hash),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, email, password_hash, age, created_at, updated_at
            "#,
        )
        .bind(account_id)
        .bind(&dto.name)
        .bind(&dto.email)
        .bind(dto.age)
        .bind(&password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Validation("Email already registered".to_string())
            } else {
                tracing::error!("Failed to update account {}: {:?}", account_id, e);
                AppError::BadRequest("Could not update account".to_string())
            }
        })?;

        tracing::info!("Account updated: id={}", account.id);

        Ok(account)
    }

    /// Remove the account and return the removed record. Session tokens
    /// cascade with the row.
    pub async fn delete(&self, account_id: Uuid) -> Result<Account> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            DELETE FROM accounts
            WHERE id = $1
            RETURNING id, name, email, password_hash, age, created_at, updated_at
            "#,
        )
        .bind(account_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::Internal(format!("Account {} already removed", account_id)))?;

        tracing::info!("Account deleted: id={}, email={}", account.id, account.email);

        Ok(account)
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}
