//! Service catalog entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the services table.
#[derive(Debug, Clone, FromRow)]
pub struct ServiceEntity {
    pub id: i64,
    pub platform: String,
    pub name: String,
    pub price: f64,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<ServiceEntity> for domain::models::Service {
    fn from(entity: ServiceEntity) -> Self {
        Self {
            id: entity.id,
            platform: entity.platform,
            name: entity.name,
            price: entity.price,
            active: entity.active,
            created_at: entity.created_at,
        }
    }
}

/// Single-column row for distinct platform queries.
#[derive(Debug, Clone, FromRow)]
pub struct PlatformEntity {
    pub platform: String,
}
