//! Purchasable service (catalog entry) domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A purchasable (platform, name, price) entry.
///
/// Services are never removed; `active = false` hides them from listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: i64,
    pub platform: String,
    pub name: String,
    /// Price per unit.
    pub price: f64,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Request payload for adding (or re-adding) a service.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceRequest {
    #[validate(custom(function = "shared::validation::validate_platform"))]
    #[validate(length(max = 100, message = "Platform must be at most 100 characters"))]
    pub platform: String,

    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: String,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,
}

/// Partial update for a service; only supplied fields are written.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceRequest {
    #[validate(custom(function = "shared::validation::validate_platform"))]
    #[validate(length(max = 100, message = "Platform must be at most 100 characters"))]
    pub platform: Option<String>,

    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: Option<String>,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: Option<f64>,

    pub active: Option<bool>,
}

impl UpdateServiceRequest {
    /// True when no field was supplied.
    pub fn is_empty(&self) -> bool {
        self.platform.is_none() && self.name.is_none() && self.price.is_none() && self.active.is_none()
    }
}
