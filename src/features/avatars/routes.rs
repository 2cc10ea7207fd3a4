use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::avatars::handlers::avatar_handler;
use crate::features::avatars::services::AvatarService;

/// Routes that do not require authentication.
pub fn public_routes(service: Arc<AvatarService>) -> Router {
    Router::new()
        .route("/users/{id}/avatar", get(avatar_handler::get_avatar))
        .with_state(service)
}

/// Routes that require the auth middleware to be layered by the caller.
pub fn protected_routes(service: Arc<AvatarService>) -> Router {
    Router::new()
        .route(
            "/users/me/avatar",
            post(avatar_handler::upload_avatar).delete(avatar_handler::delete_avatar),
        )
        .with_state(service)
}
