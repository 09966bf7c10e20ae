//! Service catalog repository.

use async_trait::async_trait;
use domain::models::{CreateServiceRequest, Service, UpdateServiceRequest};
use domain::store::ServiceStore;
use domain::StoreError;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::entities::{PlatformEntity, ServiceEntity};
use crate::metrics::QueryTimer;

/// Repository for the services table.
#[derive(Clone)]
pub struct ServiceRepository {
    pool: PgPool,
}

impl ServiceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a service, or overwrite price and reactivate on (platform, name) conflict.
    pub async fn upsert_service(
        &self,
        platform: &str,
        name: &str,
        price: f64,
    ) -> Result<ServiceEntity, sqlx::Error> {
        let timer = QueryTimer::new("upsert_service");
        let result = sqlx::query_as::<_, ServiceEntity>(
            r#"
            INSERT INTO services (platform, name, price)
            VALUES ($1, $2, $3)
            ON CONFLICT (platform, name) DO UPDATE SET
                price = EXCLUDED.price,
                active = true
            RETURNING id, platform, name, price, active, created_at
            "#,
        )
        .bind(platform)
        .bind(name)
        .bind(price)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Write only the supplied columns. Returns `None` when the patch is
    /// empty or no row matched.
    pub async fn update_service(
        &self,
        id: i64,
        patch: &UpdateServiceRequest,
    ) -> Result<Option<ServiceEntity>, sqlx::Error> {
        if patch.is_empty() {
            return Ok(None);
        }

        let mut builder = build_update_query(id, patch);
        let timer = QueryTimer::new("update_service");
        let result = builder
            .build_query_as::<ServiceEntity>()
            .fetch_optional(&self.pool)
            .await;
        timer.record();
        result
    }

    /// Soft delete. Returns `None` when no row matched.
    pub async fn deactivate_service(&self, id: i64) -> Result<Option<ServiceEntity>, sqlx::Error> {
        let timer = QueryTimer::new("deactivate_service");
        let result = sqlx::query_as::<_, ServiceEntity>(
            r#"
            UPDATE services
            SET active = false
            WHERE id = $1
            RETURNING id, platform, name, price, active, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Active services, sorted by platform then name.
    pub async fn find_active(&self) -> Result<Vec<ServiceEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_active_services");
        let result = sqlx::query_as::<_, ServiceEntity>(
            r#"
            SELECT id, platform, name, price, active, created_at
            FROM services
            WHERE active = true
            ORDER BY platform ASC, name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Active services of one platform (case-insensitive), sorted by name.
    pub async fn find_active_by_platform(
        &self,
        platform: &str,
    ) -> Result<Vec<ServiceEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_active_services_by_platform");
        let result = sqlx::query_as::<_, ServiceEntity>(
            r#"
            SELECT id, platform, name, price, active, created_at
            FROM services
            WHERE LOWER(platform) = LOWER($1) AND active = true
            ORDER BY name ASC
            "#,
        )
        .bind(platform)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Distinct platforms that have at least one active service.
    pub async fn find_platforms(&self) -> Result<Vec<PlatformEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_platforms");
        let result = sqlx::query_as::<_, PlatformEntity>(
            r#"
            SELECT DISTINCT platform
            FROM services
            WHERE active = true
            ORDER BY platform ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }
}

/// Builds `UPDATE services SET <supplied columns> WHERE id = $n RETURNING ...`.
fn build_update_query(id: i64, patch: &UpdateServiceRequest) -> QueryBuilder<'static, Postgres> {
    let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE services SET ");
    {
        let mut columns = builder.separated(", ");
        if let Some(platform) = &patch.platform {
            columns.push("platform = ");
            columns.push_bind_unseparated(platform.clone());
        }
        if let Some(name) = &patch.name {
            columns.push("name = ");
            columns.push_bind_unseparated(name.clone());
        }
        if let Some(price) = patch.price {
            columns.push("price = ");
            columns.push_bind_unseparated(price);
        }
        if let Some(active) = patch.active {
            columns.push("active = ");
            columns.push_bind_unseparated(active);
        }
    }
    builder.push(" WHERE id = ");
    builder.push_bind(id);
    builder.push(" RETURNING id, platform, name, price, active, created_at");
    builder
}

#[async_trait]
impl ServiceStore for ServiceRepository {
    async fn upsert(&self, service: &CreateServiceRequest) -> Result<Service, StoreError> {
        Ok(self
            .upsert_service(&service.platform, &service.name, service.price)
            .await?
            .into())
    }

    async fn update(
        &self,
        id: i64,
        patch: &UpdateServiceRequest,
    ) -> Result<Option<Service>, StoreError> {
        Ok(self.update_service(id, patch).await?.map(Into::into))
    }

    async fn deactivate(&self, id: i64) -> Result<Option<Service>, StoreError> {
        Ok(self.deactivate_service(id).await?.map(Into::into))
    }

    async fn list_active(&self) -> Result<Vec<Service>, StoreError> {
        Ok(self.find_active().await?.into_iter().map(Into::into).collect())
    }

    async fn list_active_by_platform(&self, platform: &str) -> Result<Vec<Service>, StoreError> {
        Ok(self
            .find_active_by_platform(platform)
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn list_platforms(&self) -> Result<Vec<String>, StoreError> {
        Ok(self
            .find_platforms()
            .await?
            .into_iter()
            .map(|row| row.platform)
            .collect())
    }
}
