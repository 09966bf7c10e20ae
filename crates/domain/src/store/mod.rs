//! Store traits implemented by the persistence layer.
//!
//! Every method maps to exactly one query. Reads that may miss return
//! `Option`; single-row updates return `Option` so "zero rows matched"
//! reaches the action layer as not-found.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::{
    Admin, CreateServiceRequest, NewOrder, Order, OrderStatus, Service, Setting,
    SubmitTestimonialRequest, Testimonial, UpdateServiceRequest, UpsertUserRequest, User,
};

#[cfg(any(test, feature = "test-util"))]
pub mod memory;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Inserts the user, or overwrites email/name/photo when `uid` exists.
    async fn upsert(&self, user: &UpsertUserRequest) -> Result<User, StoreError>;
    async fn find_by_uid(&self, uid: &str) -> Result<Option<User>, StoreError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
    /// Newest first.
    async fn list_all(&self) -> Result<Vec<User>, StoreError>;
}

#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn insert(&self, order: &NewOrder) -> Result<Order, StoreError>;
    async fn find_by_order_id(&self, order_id: Uuid) -> Result<Option<Order>, StoreError>;
    /// Newest first.
    async fn list_by_user_id(&self, user_id: i64) -> Result<Vec<Order>, StoreError>;
    /// Newest first; email comparison is case-insensitive.
    async fn list_by_email(&self, email: &str) -> Result<Vec<Order>, StoreError>;
    /// Newest first.
    async fn list_all(&self) -> Result<Vec<Order>, StoreError>;
    async fn update_status(
        &self,
        order_id: Uuid,
        status: OrderStatus,
    ) -> Result<Option<Order>, StoreError>;
}

#[async_trait]
pub trait ServiceStore: Send + Sync {
    /// Inserts, or on an existing (platform, name) overwrites price and reactivates.
    async fn upsert(&self, service: &CreateServiceRequest) -> Result<Service, StoreError>;
    /// Writes only the supplied fields. Callers must supply at least one.
    async fn update(
        &self,
        id: i64,
        patch: &UpdateServiceRequest,
    ) -> Result<Option<Service>, StoreError>;
    /// Soft delete: sets `active = false`.
    async fn deactivate(&self, id: i64) -> Result<Option<Service>, StoreError>;
    /// Active services ordered by platform, then name.
    async fn list_active(&self) -> Result<Vec<Service>, StoreError>;
    /// Active services of one platform (case-insensitive) ordered by name.
    async fn list_active_by_platform(&self, platform: &str) -> Result<Vec<Service>, StoreError>;
    /// Distinct platforms of active services, sorted.
    async fn list_platforms(&self) -> Result<Vec<String>, StoreError>;
}

#[async_trait]
pub trait TestimonialStore: Send + Sync {
    /// Always inserted unapproved.
    async fn insert(&self, testimonial: &SubmitTestimonialRequest)
        -> Result<Testimonial, StoreError>;
    async fn set_approved(&self, id: i64, approved: bool)
        -> Result<Option<Testimonial>, StoreError>;
    /// Approved only, newest first.
    async fn list_approved(&self) -> Result<Vec<Testimonial>, StoreError>;
    /// Newest first.
    async fn list_all(&self) -> Result<Vec<Testimonial>, StoreError>;
}

#[async_trait]
pub trait SettingStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Setting>, StoreError>;
    /// Inserts or overwrites the value and refreshes `updated_at`.
    async fn upsert(&self, key: &str, value: &str) -> Result<Setting, StoreError>;
    /// Ordered by key.
    async fn list_all(&self) -> Result<Vec<Setting>, StoreError>;
}

#[async_trait]
pub trait AdminStore: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<Admin>, StoreError>;
    /// Inserts, or replaces the password hash of an existing username.
    async fn upsert(&self, username: &str, password_hash: &str) -> Result<Admin, StoreError>;
}

#[async_trait]
pub trait HealthProbe: Send + Sync {
    /// Round-trips a trivial query to the backing store.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Handles to every store, shared by all request handlers.
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub orders: Arc<dyn OrderStore>,
    pub services: Arc<dyn ServiceStore>,
    pub testimonials: Arc<dyn TestimonialStore>,
    pub settings: Arc<dyn SettingStore>,
    pub admins: Arc<dyn AdminStore>,
    pub health: Arc<dyn HealthProbe>,
}
