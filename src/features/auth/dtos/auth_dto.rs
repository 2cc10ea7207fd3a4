use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::accounts::dtos::AccountResponseDto;

/// Login request. Deliberately not run through field validation: every login
/// failure, malformed input included, answers the same way.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Response for login and registration: the account plus a freshly issued
/// session token.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthResponseDto {
    pub user: AccountResponseDto,
    pub token: String,
}
