//! Testimonial repository.

use async_trait::async_trait;
use domain::models::{SubmitTestimonialRequest, Testimonial};
use domain::store::TestimonialStore;
use domain::StoreError;
use sqlx::PgPool;

use crate::entities::TestimonialEntity;
use crate::metrics::QueryTimer;

/// Repository for the testimonials table.
#[derive(Clone)]
pub struct TestimonialRepository {
    pool: PgPool,
}

impl TestimonialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a testimonial. New rows are always unapproved.
    pub async fn insert_testimonial(
        &self,
        testimonial: &SubmitTestimonialRequest,
    ) -> Result<TestimonialEntity, sqlx::Error> {
        let timer = QueryTimer::new("insert_testimonial");
        let result = sqlx::query_as::<_, TestimonialEntity>(
            r#"
            INSERT INTO testimonials (user_id, name, title, rating, content, approved, avatar)
            VALUES ($1, $2, $3, $4, $5, false, $6)
            RETURNING id, user_id, name, title, rating, content, approved, avatar, created_at
            "#,
        )
        .bind(testimonial.user_id)
        .bind(&testimonial.name)
        .bind(&testimonial.title)
        .bind(testimonial.rating)
        .bind(&testimonial.content)
        .bind(&testimonial.avatar)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn set_approved_flag(
        &self,
        id: i64,
        approved: bool,
    ) -> Result<Option<TestimonialEntity>, sqlx::Error> {
        let timer = QueryTimer::new("set_testimonial_approved");
        let result = sqlx::query_as::<_, TestimonialEntity>(
            r#"
            UPDATE testimonials
            SET approved = $2
            WHERE id = $1
            RETURNING id, user_id, name, title, rating, content, approved, avatar, created_at
            "#,
        )
        .bind(id)
        .bind(approved)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Approved testimonials, newest first.
    pub async fn find_approved(&self) -> Result<Vec<TestimonialEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_approved_testimonials");
        let result = sqlx::query_as::<_, TestimonialEntity>(
            r#"
            SELECT id, user_id, name, title, rating, content, approved, avatar, created_at
            FROM testimonials
            WHERE approved = true
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn find_all(&self) -> Result<Vec<TestimonialEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_all_testimonials");
        let result = sqlx::query_as::<_, TestimonialEntity>(
            r#"
            SELECT id, user_id, name, title, rating, content, approved, avatar, created_at
            FROM testimonials
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }
}

#[async_trait]
impl TestimonialStore for TestimonialRepository {
    async fn insert(
        &self,
        testimonial: &SubmitTestimonialRequest,
    ) -> Result<Testimonial, StoreError> {
        Ok(self.insert_testimonial(testimonial).await?.into())
    }

    async fn set_approved(
        &self,
        id: i64,
        approved: bool,
    ) -> Result<Option<Testimonial>, StoreError> {
        Ok(self.set_approved_flag(id, approved).await?.map(Into::into))
    }

    async fn list_approved(&self) -> Result<Vec<Testimonial>, StoreError> {
        Ok(self.find_approved().await?.into_iter().map(Into::into).collect())
    }

    async fn list_all(&self) -> Result<Vec<Testimonial>, StoreError> {
        Ok(self.find_all().await?.into_iter().map(Into::into).collect())
    }
}
