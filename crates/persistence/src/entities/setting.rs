//! Site setting entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the settings table.
#[derive(Debug, Clone, FromRow)]
pub struct SettingEntity {
    pub id: i64,
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

impl From<SettingEntity> for domain::models::Setting {
    fn from(entity: SettingEntity) -> Self {
        Self {
            id: entity.id,
            key: entity.key,
            value: entity.value,
            updated_at: entity.updated_at,
        }
    }
}
