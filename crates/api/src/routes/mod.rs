//! HTTP route handlers.
//!
//! Handlers translate requests into domain actions and render the
//! resulting `ActionResult` through [`ActionReply`](crate::error::ActionReply).

pub mod admin;
pub mod catalog;
pub mod health;
pub mod orders;
pub mod settings;
pub mod testimonials;
pub mod users;

use uuid::Uuid;

use crate::error::ApiError;

/// Parses a public order id path segment.
pub(crate) fn parse_order_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::Validation("Invalid order id".to_string()))
}

/// Parses a numeric row id path segment.
pub(crate) fn parse_id(raw: &str, entity: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ApiError::Validation(format!("Invalid {} id", entity)))
}
