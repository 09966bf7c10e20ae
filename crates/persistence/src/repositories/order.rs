//! Order repository for database operations.

use async_trait::async_trait;
use domain::models::{NewOrder, Order, OrderStatus};
use domain::store::OrderStore;
use domain::StoreError;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::OrderEntity;
use crate::metrics::QueryTimer;

/// Repository for order-related database operations.
#[derive(Clone)]
pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new order and return the stored row.
    pub async fn insert_order(&self, order: &NewOrder) -> Result<OrderEntity, sqlx::Error> {
        let timer = QueryTimer::new("insert_order");
        let result = sqlx::query_as::<_, OrderEntity>(
            r#"
            INSERT INTO orders (order_id, user_id, platform, service, link, quantity, total,
                                status, name, email, message, screenshot)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING id, order_id, user_id, platform, service, link, quantity, total,
                   status, name, email, message, screenshot, created_at
            "#,
        )
        .bind(order.order_id)
        .bind(order.user_id)
        .bind(&order.platform)
        .bind(&order.service)
        .bind(&order.link)
        .bind(order.quantity)
        .bind(order.total)
        .bind(order.status.as_str())
        .bind(&order.name)
        .bind(&order.email)
        .bind(&order.message)
        .bind(&order.screenshot)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find an order by its public UUID.
    pub async fn find_by_public_id(&self, order_id: Uuid) -> Result<Option<OrderEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_order_by_order_id");
        let result = sqlx::query_as::<_, OrderEntity>(
            r#"
            SELECT id, order_id, user_id, platform, service, link, quantity, total,
                   status, name, email, message, screenshot, created_at
            FROM orders
            WHERE order_id = $1
            "#,
        )
        .bind(order_id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Orders placed by a registered user, newest first.
    pub async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<OrderEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_orders_by_user_id");
        let result = sqlx::query_as::<_, OrderEntity>(
            r#"
            SELECT id, order_id, user_id, platform, service, link, quantity, total,
                   status, name, email, message, screenshot, created_at
            FROM orders
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Orders placed with an email address (case-insensitive), newest first.
    pub async fn find_by_email(&self, email: &str) -> Result<Vec<OrderEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_orders_by_email");
        let result = sqlx::query_as::<_, OrderEntity>(
            r#"
            SELECT id, order_id, user_id, platform, service, link, quantity, total,
                   status, name, email, message, screenshot, created_at
            FROM orders
            WHERE LOWER(email) = LOWER($1)
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// All orders, newest first.
    pub async fn find_all(&self) -> Result<Vec<OrderEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_all_orders");
        let result = sqlx::query_as::<_, OrderEntity>(
            r#"
            SELECT id, order_id, user_id, platform, service, link, quantity, total,
                   status, name, email, message, screenshot, created_at
            FROM orders
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Overwrite the status of one order. Returns `None` when no row matched.
    pub async fn set_status(
        &self,
        order_id: Uuid,
        status: OrderStatus,
    ) -> Result<Option<OrderEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_order_status");
        let result = sqlx::query_as::<_, OrderEntity>(
            r#"
            UPDATE orders
            SET status = $2
            WHERE order_id = $1
            RETURNING id, order_id, user_id, platform, service, link, quantity, total,
                   status, name, email, message, screenshot, created_at
            "#,
        )
        .bind(order_id)
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }
}

#[async_trait]
impl OrderStore for OrderRepository {
    async fn insert(&self, order: &NewOrder) -> Result<Order, StoreError> {
        Ok(self.insert_order(order).await?.into())
    }

    async fn find_by_order_id(&self, order_id: Uuid) -> Result<Option<Order>, StoreError> {
        Ok(self.find_by_public_id(order_id).await?.map(Into::into))
    }

    async fn list_by_user_id(&self, user_id: i64) -> Result<Vec<Order>, StoreError> {
        Ok(self
            .find_by_user_id(user_id)
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn list_by_email(&self, email: &str) -> Result<Vec<Order>, StoreError> {
        Ok(self
            .find_by_email(email)
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<Order>, StoreError> {
        Ok(self.find_all().await?.into_iter().map(Into::into).collect())
    }

    async fn update_status(
        &self,
        order_id: Uuid,
        status: OrderStatus,
    ) -> Result<Option<Order>, StoreError> {
        Ok(self.set_status(order_id, status).await?.map(Into::into))
    }
}
