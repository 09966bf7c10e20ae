//! Database health probe.

use async_trait::async_trait;
use domain::store::HealthProbe;
use domain::StoreError;
use sqlx::PgPool;

use crate::metrics::{record_pool_metrics, QueryTimer};

#[derive(Clone)]
pub struct HealthRepository {
    pool: PgPool,
}

impl HealthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HealthProbe for HealthRepository {
    async fn ping(&self) -> Result<(), StoreError> {
        record_pool_metrics(&self.pool);
        let timer = QueryTimer::new("health_check");
        let result = sqlx::query("SELECT 1").execute(&self.pool).await;
        timer.record();
        result.map(|_| ()).map_err(StoreError::from)
    }
}
