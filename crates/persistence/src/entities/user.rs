//! User entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the users table.
#[derive(Debug, Clone, FromRow)]
pub struct UserEntity {
    pub id: i64,
    pub uid: String,
    pub email: String,
    pub name: String,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<UserEntity> for domain::models::User {
    fn from(entity: UserEntity) -> Self {
        Self {
            id: entity.id,
            uid: entity.uid,
            email: entity.email,
            name: entity.name,
            photo_url: entity.photo_url,
            created_at: entity.created_at,
        }
    }
}
