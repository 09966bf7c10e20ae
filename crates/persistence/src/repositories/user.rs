//! User repository for database operations.

use async_trait::async_trait;
use domain::models::{UpsertUserRequest, User};
use domain::store::UserStore;
use domain::StoreError;
use sqlx::PgPool;

use crate::entities::UserEntity;
use crate::metrics::QueryTimer;

/// Repository for user-related database operations.
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a user, or refresh email/name/photo when the uid already exists.
    pub async fn upsert_user(&self, user: &UpsertUserRequest) -> Result<UserEntity, sqlx::Error> {
        let timer = QueryTimer::new("upsert_user");
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            INSERT INTO users (uid, email, name, photo_url)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (uid) DO UPDATE SET
                email = EXCLUDED.email,
                name = EXCLUDED.name,
                photo_url = EXCLUDED.photo_url
            RETURNING id, uid, email, name, photo_url, created_at
            "#,
        )
        .bind(&user.uid)
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.photo_url)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn find_user_by_uid(&self, uid: &str) -> Result<Option<UserEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_user_by_uid");
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT id, uid, email, name, photo_url, created_at
            FROM users
            WHERE uid = $1
            "#,
        )
        .bind(uid)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<UserEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_user_by_email");
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT id, uid, email, name, photo_url, created_at
            FROM users
            WHERE LOWER(email) = LOWER($1)
            ORDER BY id ASC
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn find_all(&self) -> Result<Vec<UserEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_all_users");
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT id, uid, email, name, photo_url, created_at
            FROM users
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
impl UserStore for UserRepository {
    async fn upsert(&self, user: &UpsertUserRequest) -> Result<User, StoreError> {
        Ok(self.upsert_user(user).await?.into())
    }

    async fn find_by_uid(&self, uid: &str) -> Result<Option<User>, StoreError> {
        Ok(self.find_user_by_uid(uid).await?.map(Into::into))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.find_user_by_email(email).await?.map(Into::into))
    }

    async fn list_all(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.find_all().await?.into_iter().map(Into::into).collect())
    }
}
