//! Order domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

/// Processing status of an order.
///
/// Any status may overwrite any other; there is no enforced progression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    #[serde(rename = "In Review")]
    InReview,
    Processing,
    Completed,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::InReview,
        OrderStatus::Processing,
        OrderStatus::Completed,
    ];

    /// Storage and wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::InReview => "In Review",
            OrderStatus::Processing => "Processing",
            OrderStatus::Completed => "Completed",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "in review" | "in_review" => Ok(OrderStatus::InReview),
            "processing" => Ok(OrderStatus::Processing),
            "completed" => Ok(OrderStatus::Completed),
            _ => Err(format!("Invalid order status: {}", s)),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A customer order for a quantity of a platform service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    /// Public identifier handed to customers for tracking.
    pub order_id: Uuid,
    pub user_id: Option<i64>,
    pub platform: String,
    /// Service name at the time of ordering, not a foreign key.
    pub service: String,
    pub link: Option<String>,
    pub quantity: i32,
    pub total: f64,
    pub status: OrderStatus,
    pub name: String,
    pub email: String,
    pub message: Option<String>,
    pub screenshot: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request payload for placing an order.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub user_id: Option<i64>,

    #[validate(custom(function = "shared::validation::validate_platform"))]
    #[validate(length(max = 100, message = "Platform must be at most 100 characters"))]
    pub platform: String,

    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    #[validate(length(max = 255, message = "Service must be at most 255 characters"))]
    pub service: String,

    #[validate(url(message = "Link must be a valid URL"))]
    #[validate(length(max = 2048, message = "Link must be at most 2048 characters"))]
    #[validate(custom(function = "shared::validation::validate_http_scheme"))]
    pub link: Option<String>,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,

    #[validate(range(min = 0.0, message = "Total must not be negative"))]
    pub total: f64,

    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    #[validate(length(max = 255, message = "Email must be at most 255 characters"))]
    pub email: String,

    #[validate(length(max = 2000, message = "Message must be at most 2000 characters"))]
    pub message: Option<String>,

    pub screenshot: Option<String>,
}

/// A fully formed order row ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub order_id: Uuid,
    pub user_id: Option<i64>,
    pub platform: String,
    pub service: String,
    pub link: Option<String>,
    pub quantity: i32,
    pub total: f64,
    pub status: OrderStatus,
    pub name: String,
    pub email: String,
    pub message: Option<String>,
    pub screenshot: Option<String>,
}

impl NewOrder {
    /// Assigns a fresh public order id and the initial `Pending` status.
    pub fn pending(request: CreateOrderRequest) -> Self {
        Self {
            order_id: Uuid::new_v4(),
            user_id: request.user_id,
            platform: request.platform,
            service: request.service,
            link: request.link,
            quantity: request.quantity,
            total: request.total,
            status: OrderStatus::Pending,
            name: request.name,
            email: request.email,
            message: request.message,
            screenshot: request.screenshot,
        }
    }
}

/// Request payload for overwriting an order's status.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

/// Response payload for order creation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedOrder {
    pub order_id: Uuid,
    pub order: Order,
}

impl From<Order> for CreatedOrder {
    fn from(order: Order) -> Self {
        Self {
            order_id: order.order_id,
            order,
        }
    }
}
