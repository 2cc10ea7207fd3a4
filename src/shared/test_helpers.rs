#[cfg(test)]
use crate::features::auth::model::AuthSession;

#[cfg(test)]
use crate::features::accounts::models::Account;

#[cfg(test)]
use axum::{extract::Request, middleware::Next, response::Response, Router};

#[cfg(test)]
pub fn create_test_session() -> AuthSession {
    use chrono::Utc;
    use uuid::Uuid;

    AuthSession {
        account: Account {
            id: Uuid::new_v4(),
            name: "Test Account".to_string(),
            email: "test@example.com".to_string(),
            password_hash: "$argon2id$test".to_string(),
            age: 30,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        },
        token_id: Uuid::new_v4(),
    }
}

#[cfg(test)]
async fn inject_session_middleware(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(create_test_session());
    next.run(request).await
}

#[cfg(test)]
pub fn with_test_session(router: Router) -> Router {
    router.layer(axum::middleware::from_fn(inject_session_middleware))
}
