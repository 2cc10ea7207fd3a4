use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::accounts::{dtos as accounts_dtos, handlers::account_handler};
use crate::features::auth::{dtos as auth_dtos, handlers::auth_handler};
use crate::features::avatars::{dtos as avatars_dtos, handlers::avatar_handler};
use crate::shared::types::ApiResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Accounts
        account_handler::register,
        account_handler::get_me,
        account_handler::update_me,
        account_handler::delete_me,
        // Sessions
        auth_handler::login,
        auth_handler::logout,
        auth_handler::logout_all,
        // Avatars
        avatar_handler::upload_avatar,
        avatar_handler::delete_avatar,
        avatar_handler::get_avatar,
    ),
    components(
        schemas(
            // Accounts
            accounts_dtos::RegisterAccountDto,
            accounts_dtos::UpdateAccountDto,
            accounts_dtos::AccountResponseDto,
            ApiResponse<accounts_dtos::AccountResponseDto>,
            // Sessions
            auth_dtos::LoginDto,
            auth_dtos::AuthResponseDto,
            ApiResponse<auth_dtos::AuthResponseDto>,
            // Avatars
            avatars_dtos::UploadAvatarDto,
        )
    ),
    tags(
        (name = "accounts", description = "Account registration and profile management"),
        (name = "sessions", description = "Credential login and session revocation"),
        (name = "avatars", description = "Profile picture upload and serving"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Accounts API",
        version = "0.1.0",
        description = "User account management API",
    )
)]
pub struct ApiDoc;

/// Adds the bearer token security scheme to the OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
