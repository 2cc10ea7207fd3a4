use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Fields a profile update is allowed to touch. Any other key in the request
/// body rejects the whole update before anything is written.
pub const UPDATE_ALLOWED_FIELDS: &[&str] = &["name", "email", "age", "password"];

/// Request DTO for account registration
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterAccountDto {
    #[validate(length(min = 1, max = 128, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Email is invalid"))]
    pub email: String,

    #[validate(
        length(min = 7, message = "Password must be at least 7 characters"),
        custom(function = validate_password)
    )]
    pub password: String,

    /// Defaults to 0 when omitted
    #[serde(default)]
    #[validate(range(min = 0, message = "Age must be a positive number"))]
    pub age: i32,
}

/// Request DTO for profile updates. All fields optional; the handler checks
/// the raw body keys against [`UPDATE_ALLOWED_FIELDS`] before deserializing.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateAccountDto {
    #[validate(length(min = 1, max = 128, message = "Name must not be empty"))]
    pub name: Option<String>,

    #[validate(email(message = "Email is invalid"))]
    pub email: Option<String>,

    #[validate(
        length(min = 7, message = "Password must be at least 7 characters"),
        custom(function = validate_password)
    )]
    pub password: Option<String>,

    #[validate(range(min = 0, message = "Age must be a positive number"))]
    pub age: Option<i32>,
}

/// Response DTO for account records. Never carries the password hash or the
/// avatar blob.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccountResponseDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub age: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.to_lowercase().contains("password") {
        let mut err = ValidationError::new("password_contains_password");
        err.message = Some("Password may not contain the word \"password\"".into());
        return Err(err);
    }
    Ok(())
}

/// Check the raw update body against the allow-list. Rejects non-object
/// bodies and any key outside [`UPDATE_ALLOWED_FIELDS`].
pub fn validate_update_keys(body: &Value) -> Result<(), String> {
    let map = body
        .as_object()
        .ok_or_else(|| "Request body must be a JSON object".to_string())?;

    let disallowed: Vec<&str> = map
        .keys()
        .map(String::as_str)
        .filter(|key| !UPDATE_ALLOWED_FIELDS.contains(key))
        .collect();

    if !disallowed.is_empty() {
        return Err(format!("Invalid updates: {}", disallowed.join(", ")));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_keys_allowed() {
        let body = json!({"name": "New Name", "email": "a@b.com", "age": 30, "password": "longenough"});
        assert!(validate_update_keys(&body).is_ok());
    }

    #[test]
    fn test_update_keys_disallowed_field() {
        let body = json!({"name": "New Name", "role": "admin"});
        let err = validate_update_keys(&body).unwrap_err();
        assert!(err.contains("role"));
        assert!(!err.contains("name"));
    }

    #[test]
    fn test_update_keys_rejects_non_object() {
        assert!(validate_update_keys(&json!("just a string")).is_err());
        assert!(validate_update_keys(&json!([1, 2, 3])).is_err());
    }

    #[test]
    fn test_update_keys_empty_object_is_ok() {
        assert!(validate_update_keys(&json!({})).is_ok());
    }

    #[test]
    fn test_register_dto_rejects_password_containing_password() {
        let dto = RegisterAccountDto {
            name: "Someone".to_string(),
            email: "someone@example.com".to_string(),
            password: "mypassword1".to_string(),
            age: 0,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_register_dto_rejects_short_password() {
        let dto = RegisterAccountDto {
            name: "Someone".to_string(),
            email: "someone@example.com".to_string(),
            password: "short".to_string(),
            age: 0,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_register_dto_rejects_negative_age() {
        let dto = RegisterAccountDto {
            name: "Someone".to_string(),
            email: "someone@example.com".to_string(),
            password: "longenough".to_string(),
            age: -1,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_register_dto_valid() {
        use fake::faker::internet::en::SafeEmail;
        use fake::faker::name::en::Name;
        use fake::Fake;

        let dto = RegisterAccountDto {
            name: Name().fake(),
            email: SafeEmail().fake(),
            password: "longenough".to_string(),
            age: 27,
        };
        assert!(dto.validate().is_ok());
    }
}
