use uuid::Uuid;

use crate::features::accounts::models::Account;

/// Authenticated request context: the account the presented token belongs to
/// plus the id of the token row itself.
///
/// `token_id` is what logout needs to revoke exactly the presenting session
/// and what logout-all needs to spare it.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub account: Account,
    pub token_id: Uuid,
}
