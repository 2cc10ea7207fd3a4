use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::accounts::handlers::{account_handler, AccountState};
use crate::features::accounts::services::AccountService;
use crate::features::auth::services::SessionService;
use crate::modules::mailer::Mailer;

/// Routes that do not require authentication.
pub fn public_routes(
    account_service: Arc<AccountService>,
    session_service: Arc<SessionService>,
    mailer: Arc<Mailer>,
) -> Router {
    let state = AccountState {
        account_service,
        session_service,
        mailer,
    };

    Router::new()
        .route("/users", post(account_handler::register))
        .with_state(state)
}

/// Routes that require the auth middleware to be layered by the caller.
pub fn protected_routes(
    account_service: Arc<AccountService>,
    session_service: Arc<SessionService>,
    mailer: Arc<Mailer>,
) -> Router {
    let state = AccountState {
        account_service,
        session_service,
        mailer,
    };

    Router::new()
        .route(
            "/users/me",
            get(account_handler::get_me)
                .patch(account_handler::update_me)
                .delete(account_handler::delete_me),
        )
        .with_state(state)
}
