//! Testimonial entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the testimonials table.
#[derive(Debug, Clone, FromRow)]
pub struct TestimonialEntity {
    pub id: i64,
    pub user_id: Option<i64>,
    pub name: String,
    pub title: String,
    pub rating: i32,
    pub content: String,
    pub approved: bool,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<TestimonialEntity> for domain::models::Testimonial {
    fn from(entity: TestimonialEntity) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            name: entity.name,
            title: entity.title,
            rating: entity.rating,
            content: entity.content,
            approved: entity.approved,
            avatar: entity.avatar,
            created_at: entity.created_at,
        }
    }
}
