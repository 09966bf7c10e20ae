//! Order entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::OrderStatus;
use sqlx::FromRow;
use std::str::FromStr;
use tracing::warn;
use uuid::Uuid;

/// Database row mapping for the orders table.
#[derive(Debug, Clone, FromRow)]
pub struct OrderEntity {
    pub id: i64,
    pub order_id: Uuid,
    pub user_id: Option<i64>,
    pub platform: String,
    pub service: String,
    pub link: Option<String>,
    pub quantity: i32,
    pub total: f64,
    pub status: String,
    pub name: String,
    pub email: String,
    pub message: Option<String>,
    pub screenshot: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<OrderEntity> for domain::models::Order {
    fn from(entity: OrderEntity) -> Self {
        let status = OrderStatus::from_str(&entity.status).unwrap_or_else(|_| {
            warn!(order_id = %entity.order_id, status = %entity.status, "Unknown order status in database");
            OrderStatus::Pending
        });

        Self {
            id: entity.id,
            order_id: entity.order_id,
            user_id: entity.user_id,
            platform: entity.platform,
            service: entity.service,
            link: entity.link,
            quantity: entity.quantity,
            total: entity.total,
            status,
            name: entity.name,
            email: entity.email,
            message: entity.message,
            screenshot: entity.screenshot,
            created_at: entity.created_at,
        }
    }
}
