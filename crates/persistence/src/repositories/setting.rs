//! Site settings repository.

use async_trait::async_trait;
use domain::models::Setting;
use domain::store::SettingStore;
use domain::StoreError;
use sqlx::PgPool;

use crate::entities::SettingEntity;
use crate::metrics::QueryTimer;

/// Repository for the settings key/value table.
#[derive(Clone)]
pub struct SettingRepository {
    pool: PgPool,
}

impl SettingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_key(&self, key: &str) -> Result<Option<SettingEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_setting_by_key");
        let result = sqlx::query_as::<_, SettingEntity>(
            r#"
            SELECT id, key, value, updated_at
            FROM settings
            WHERE key = $1
            "#,
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Insert or overwrite a value, refreshing `updated_at`.
    pub async fn upsert_setting(&self, key: &str, value: &str) -> Result<SettingEntity, sqlx::Error> {
        let timer = QueryTimer::new("upsert_setting");
        let result = sqlx::query_as::<_, SettingEntity>(
            r#"
            INSERT INTO settings (key, value, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (key) DO UPDATE SET
                value = EXCLUDED.value,
                updated_at = NOW()
            RETURNING id, key, value, updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn find_all(&self) -> Result<Vec<SettingEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_all_settings");
        let result = sqlx::query_as::<_, SettingEntity>(
            r#"
            SELECT id, key, value, updated_at
            FROM settings
            ORDER BY key ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }
}

#[async_trait]
impl SettingStore for SettingRepository {
    async fn get(&self, key: &str) -> Result<Option<Setting>, StoreError> {
        Ok(self.find_by_key(key).await?.map(Into::into))
    }

    async fn upsert(&self, key: &str, value: &str) -> Result<Setting, StoreError> {
        Ok(self.upsert_setting(key, value).await?.into())
    }

    async fn list_all(&self) -> Result<Vec<Setting>, StoreError> {
        Ok(self.find_all().await?.into_iter().map(Into::into).collect())
    }
}
