//! Testimonial domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A customer review, shown publicly only once approved by an admin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: i64,
    pub user_id: Option<i64>,
    pub name: String,
    /// Short descriptor of the author, e.g. "YouTube Creator".
    pub title: String,
    pub rating: i32,
    pub content: String,
    pub approved: bool,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request payload for submitting a testimonial.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitTestimonialRequest {
    pub user_id: Option<i64>,

    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(length(max = 100, message = "Title must be at most 100 characters"))]
    pub title: String,

    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,

    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    #[validate(length(max = 2000, message = "Content must be at most 2000 characters"))]
    pub content: String,

    pub avatar: Option<String>,
}

/// Moderation decision applied to a testimonial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Moderation {
    Approve,
    Reject,
}

impl Moderation {
    pub fn approved(self) -> bool {
        matches!(self, Moderation::Approve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moderation_flag() {
        assert!(Moderation::Approve.approved());
        assert!(!Moderation::Reject.approved());
    }

    #[test]
    fn test_submit_request_rating_bounds() {
        let mut request = SubmitTestimonialRequest {
            user_id: None,
            name: "Emily".to_string(),
            title: "Business Owner".to_string(),
            rating: 5,
            content: "Great service".to_string(),
            avatar: None,
        };
        assert!(request.validate().is_ok());

        request.rating = 6;
        assert!(request.validate().is_err());
        request.rating = 0;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_testimonial_serialization() {
        let testimonial = Testimonial {
            id: 1,
            user_id: None,
            name: "Michael".to_string(),
            title: "YouTube Creator".to_string(),
            rating: 5,
            content: "Helped me reach monetization".to_string(),
            approved: false,
            avatar: None,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&testimonial).unwrap();
        assert_eq!(json["approved"], false);
        assert!(json.get("userId").is_some());
    }
}
