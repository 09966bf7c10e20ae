//! Admin account repository.

use async_trait::async_trait;
use domain::models::Admin;
use domain::store::AdminStore;
use domain::StoreError;
use sqlx::PgPool;

use crate::entities::AdminEntity;
use crate::metrics::QueryTimer;

#[derive(Clone)]
pub struct AdminRepository {
    pool: PgPool,
}

impl AdminRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_admin_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_admin_by_username");
        let result = sqlx::query_as::<_, AdminEntity>(
            r#"
            SELECT id, username, password_hash, created_at
            FROM admins
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Insert an admin, or replace the password hash of an existing username.
    pub async fn upsert_admin(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<AdminEntity, sqlx::Error> {
        let timer = QueryTimer::new("upsert_admin");
        let result = sqlx::query_as::<_, AdminEntity>(
            r#"
            INSERT INTO admins (username, password_hash)
            VALUES ($1, $2)
            ON CONFLICT (username) DO UPDATE SET
                password_hash = EXCLUDED.password_hash
            RETURNING id, username, password_hash, created_at
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }
}

#[async_trait]
impl AdminStore for AdminRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<Admin>, StoreError> {
        Ok(self.find_admin_by_username(username).await?.map(Into::into))
    }

    async fn upsert(&self, username: &str, password_hash: &str) -> Result<Admin, StoreError> {
        Ok(self.upsert_admin(username, password_hash).await?.into())
    }
}
