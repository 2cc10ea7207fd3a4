use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::auth::handlers::auth_handler;
use crate::features::auth::services::SessionService;

/// Routes that do not require authentication.
pub fn public_routes(service: Arc<SessionService>) -> Router {
    Router::new()
        .route("/users/login", post(auth_handler::login))
        .with_state(service)
}

/// Routes that require the auth middleware to be layered by the caller.
///
/// `/user/logoutAll` keeps its historical path, singular segment and all;
/// existing clients depend on it.
pub fn protected_routes(service: Arc<SessionService>) -> Router {
    Router::new()
        .route("/users/logout", post(auth_handler::logout))
        .route("/user/logoutAll", post(auth_handler::logout_all))
        .with_state(service)
}
