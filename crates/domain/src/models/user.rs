//! Customer account domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A customer signed in through the external identity provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    /// Identity-provider subject id.
    pub uid: String,
    pub email: String,
    pub name: String,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Profile reported by the identity provider; upserted on `uid`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpsertUserRequest {
    #[validate(length(min = 1, max = 255, message = "uid must be between 1 and 255 characters"))]
    pub uid: String,

    #[validate(email(message = "Invalid email format"))]
    #[validate(length(max = 255, message = "Email must be at most 255 characters"))]
    pub email: String,

    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(url(message = "Invalid photo URL"))]
    pub photo_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_request_from_json() {
        let json = r#"{
            "uid": "google-oauth2|123",
            "email": "jane@example.com",
            "name": "Jane",
            "photoUrl": "https://example.com/jane.png"
        }"#;
        let request: UpsertUserRequest = serde_json::from_str(json).unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.photo_url.as_deref(), Some("https://example.com/jane.png"));
    }

    #[test]
    fn test_upsert_request_rejects_overlong_email() {
        let request = UpsertUserRequest {
            uid: "abc".to_string(),
            email: format!("{}@{}.com", "j".repeat(60), "d".repeat(200)),
            name: "Jane".to_string(),
            photo_url: None,
        };
        assert!(request.validate().unwrap_err().field_errors().contains_key("email"));
    }

    #[test]
    fn test_upsert_request_rejects_bad_photo_url() {
        let request = UpsertUserRequest {
            uid: "abc".to_string(),
            email: "jane@example.com".to_string(),
            name: "Jane".to_string(),
            photo_url: Some("not a url".to_string()),
        };
        assert!(request.validate().unwrap_err().field_errors().contains_key("photo_url"));
    }
}
