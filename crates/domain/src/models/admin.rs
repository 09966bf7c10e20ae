//! Administrator account domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)] // Never serialize password hash to API responses
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Login form submitted to the admin area.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AdminLoginRequest {
    pub username: String,
    pub password: String,
}

/// Request payload for creating an admin or rotating its password.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAdminRequest {
    #[validate(length(min = 3, max = 50, message = "Username must be between 3 and 50 characters"))]
    pub username: String,

    #[validate(length(min = 8, max = 128, message = "Password must be between 8 and 128 characters"))]
    pub password: String,
}

/// Data returned from a successful login.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminIdentity {
    pub username: String,
}

/// Whether the caller currently holds an admin session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionStatus {
    pub authenticated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_password_hash_not_serialized() {
        let admin = Admin {
            id: 1,
            username: "admin".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&admin).unwrap();
        assert!(!json.contains("argon2id"));
        assert!(!json.contains("passwordHash"));
    }

    #[test]
    fn test_create_admin_request_password_length() {
        let request = CreateAdminRequest {
            username: "admin".to_string(),
            password: "short".to_string(),
        };
        assert!(request.validate().unwrap_err().field_errors().contains_key("password"));
    }
}
