//! In-memory store for tests.
//!
//! Mirrors the query semantics of the PostgreSQL repositories closely enough
//! to exercise the action layer and HTTP routes without a database.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

use super::{
    AdminStore, HealthProbe, OrderStore, ServiceStore, SettingStore, Stores, TestimonialStore,
    UserStore,
};
use crate::error::StoreError;
use crate::models::{
    Admin, CreateServiceRequest, NewOrder, Order, OrderStatus, Service, Setting,
    SubmitTestimonialRequest, Testimonial, UpdateServiceRequest, UpsertUserRequest, User,
};

#[derive(Default)]
struct State {
    next_id: i64,
    users: Vec<User>,
    orders: Vec<Order>,
    services: Vec<Service>,
    testimonials: Vec<Testimonial>,
    settings: Vec<Setting>,
    admins: Vec<Admin>,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Store backed by vectors behind a mutex.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
    /// When set, every call fails as if the database were unreachable.
    pub simulate_failure: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails with a storage error.
    pub fn failing() -> Self {
        Self {
            state: Mutex::default(),
            simulate_failure: true,
        }
    }

    /// Wraps this store into the handle set used by actions and routes.
    pub fn into_stores(self) -> Stores {
        let store = Arc::new(self);
        Stores {
            users: store.clone(),
            orders: store.clone(),
            services: store.clone(),
            testimonials: store.clone(),
            settings: store.clone(),
            admins: store.clone(),
            health: store,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>, StoreError> {
        if self.simulate_failure {
            return Err(StoreError::Unavailable("simulated failure".to_string()));
        }
        self.state
            .lock()
            .map_err(|_| StoreError::Database("memory store poisoned".to_string()))
    }
}

fn newest_first<T>(
    items: impl Iterator<Item = T>,
    key: impl Fn(&T) -> (DateTime<Utc>, i64),
) -> Vec<T> {
    let mut items: Vec<T> = items.collect();
    items.sort_by(|a, b| key(b).cmp(&key(a)));
    items
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn upsert(&self, user: &UpsertUserRequest) -> Result<User, StoreError> {
        let mut state = self.lock()?;
        if let Some(existing) = state.users.iter_mut().find(|u| u.uid == user.uid) {
            existing.email = user.email.clone();
            existing.name = user.name.clone();
            existing.photo_url = user.photo_url.clone();
            return Ok(existing.clone());
        }
        let row = User {
            id: state.next_id(),
            uid: user.uid.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            photo_url: user.photo_url.clone(),
            created_at: Utc::now(),
        };
        state.users.push(row.clone());
        Ok(row)
    }

    async fn find_by_uid(&self, uid: &str) -> Result<Option<User>, StoreError> {
        Ok(self.lock()?.users.iter().find(|u| u.uid == uid).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .lock()?
            .users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, StoreError> {
        let state = self.lock()?;
        Ok(newest_first(state.users.iter().cloned(), |u| (u.created_at, u.id)))
    }
}

#[async_trait]
impl OrderStore for MemoryStore {
    async fn insert(&self, order: &NewOrder) -> Result<Order, StoreError> {
        let mut state = self.lock()?;
        if state.orders.iter().any(|o| o.order_id == order.order_id) {
            return Err(StoreError::Conflict("orders_order_id_key".to_string()));
        }
        let row = Order {
            id: state.next_id(),
            order_id: order.order_id,
            user_id: order.user_id,
            platform: order.platform.clone(),
            service: order.service.clone(),
            link: order.link.clone(),
            quantity: order.quantity,
            total: order.total,
            status: order.status,
            name: order.name.clone(),
            email: order.email.clone(),
            message: order.message.clone(),
            screenshot: order.screenshot.clone(),
            created_at: Utc::now(),
        };
        state.orders.push(row.clone());
        Ok(row)
    }

    async fn find_by_order_id(&self, order_id: Uuid) -> Result<Option<Order>, StoreError> {
        Ok(self
            .lock()?
            .orders
            .iter()
            .find(|o| o.order_id == order_id)
            .cloned())
    }

    async fn list_by_user_id(&self, user_id: i64) -> Result<Vec<Order>, StoreError> {
        let state = self.lock()?;
        Ok(newest_first(
            state
                .orders
                .iter()
                .filter(|o| o.user_id == Some(user_id))
                .cloned(),
            |o| (o.created_at, o.id),
        ))
    }

    async fn list_by_email(&self, email: &str) -> Result<Vec<Order>, StoreError> {
        let state = self.lock()?;
        Ok(newest_first(
            state
                .orders
                .iter()
                .filter(|o| o.email.eq_ignore_ascii_case(email))
                .cloned(),
            |o| (o.created_at, o.id),
        ))
    }

    async fn list_all(&self) -> Result<Vec<Order>, StoreError> {
        let state = self.lock()?;
        Ok(newest_first(state.orders.iter().cloned(), |o| (o.created_at, o.id)))
    }

    async fn update_status(
        &self,
        order_id: Uuid,
        status: OrderStatus,
    ) -> Result<Option<Order>, StoreError> {
        let mut state = self.lock()?;
        Ok(state
            .orders
            .iter_mut()
            .find(|o| o.order_id == order_id)
            .map(|o| {
                o.status = status;
                o.clone()
            }))
    }
}

#[async_trait]
impl ServiceStore for MemoryStore {
    async fn upsert(&self, service: &CreateServiceRequest) -> Result<Service, StoreError> {
        let mut state = self.lock()?;
        if let Some(existing) = state
            .services
            .iter_mut()
            .find(|s| s.platform == service.platform && s.name == service.name)
        {
            existing.price = service.price;
            existing.active = true;
            return Ok(existing.clone());
        }
        let row = Service {
            id: state.next_id(),
            platform: service.platform.clone(),
            name: service.name.clone(),
            price: service.price,
            active: true,
            created_at: Utc::now(),
        };
        state.services.push(row.clone());
        Ok(row)
    }

    async fn update(
        &self,
        id: i64,
        patch: &UpdateServiceRequest,
    ) -> Result<Option<Service>, StoreError> {
        if patch.is_empty() {
            return Ok(None);
        }
        let mut state = self.lock()?;
        Ok(state.services.iter_mut().find(|s| s.id == id).map(|s| {
            if let Some(platform) = &patch.platform {
                s.platform = platform.clone();
            }
            if let Some(name) = &patch.name {
                s.name = name.clone();
            }
            if let Some(price) = patch.price {
                s.price = price;
            }
            if let Some(active) = patch.active {
                s.active = active;
            }
            s.clone()
        }))
    }

    async fn deactivate(&self, id: i64) -> Result<Option<Service>, StoreError> {
        let mut state = self.lock()?;
        Ok(state.services.iter_mut().find(|s| s.id == id).map(|s| {
            s.active = false;
            s.clone()
        }))
    }

    async fn list_active(&self) -> Result<Vec<Service>, StoreError> {
        let state = self.lock()?;
        let mut services: Vec<Service> =
            state.services.iter().filter(|s| s.active).cloned().collect();
        services.sort_by(|a, b| (&a.platform, &a.name).cmp(&(&b.platform, &b.name)));
        Ok(services)
    }

    async fn list_active_by_platform(&self, platform: &str) -> Result<Vec<Service>, StoreError> {
        let state = self.lock()?;
        let mut services: Vec<Service> = state
            .services
            .iter()
            .filter(|s| s.active && s.platform.to_lowercase() == platform.to_lowercase())
            .cloned()
            .collect();
        services.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(services)
    }

    async fn list_platforms(&self) -> Result<Vec<String>, StoreError> {
        let state = self.lock()?;
        let mut platforms: Vec<String> = state
            .services
            .iter()
            .filter(|s| s.active)
            .map(|s| s.platform.clone())
            .collect();
        platforms.sort();
        platforms.dedup();
        Ok(platforms)
    }
}

#[async_trait]
impl TestimonialStore for MemoryStore {
    async fn insert(
        &self,
        testimonial: &SubmitTestimonialRequest,
    ) -> Result<Testimonial, StoreError> {
        let mut state = self.lock()?;
        let row = Testimonial {
            id: state.next_id(),
            user_id: testimonial.user_id,
            name: testimonial.name.clone(),
            title: testimonial.title.clone(),
            rating: testimonial.rating,
            content: testimonial.content.clone(),
            approved: false,
            avatar: testimonial.avatar.clone(),
            created_at: Utc::now(),
        };
        state.testimonials.push(row.clone());
        Ok(row)
    }

    async fn set_approved(
        &self,
        id: i64,
        approved: bool,
    ) -> Result<Option<Testimonial>, StoreError> {
        let mut state = self.lock()?;
        Ok(state.testimonials.iter_mut().find(|t| t.id == id).map(|t| {
            t.approved = approved;
            t.clone()
        }))
    }

    async fn list_approved(&self) -> Result<Vec<Testimonial>, StoreError> {
        let state = self.lock()?;
        Ok(newest_first(
            state.testimonials.iter().filter(|t| t.approved).cloned(),
            |t| (t.created_at, t.id),
        ))
    }

    async fn list_all(&self) -> Result<Vec<Testimonial>, StoreError> {
        let state = self.lock()?;
        Ok(newest_first(state.testimonials.iter().cloned(), |t| {
            (t.created_at, t.id)
        }))
    }
}

#[async_trait]
impl SettingStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Setting>, StoreError> {
        Ok(self.lock()?.settings.iter().find(|s| s.key == key).cloned())
    }

    async fn upsert(&self, key: &str, value: &str) -> Result<Setting, StoreError> {
        let mut state = self.lock()?;
        if let Some(existing) = state.settings.iter_mut().find(|s| s.key == key) {
            existing.value = value.to_string();
            existing.updated_at = Utc::now();
            return Ok(existing.clone());
        }
        let row = Setting {
            id: state.next_id(),
            key: key.to_string(),
            value: value.to_string(),
            updated_at: Utc::now(),
        };
        state.settings.push(row.clone());
        Ok(row)
    }

    async fn list_all(&self) -> Result<Vec<Setting>, StoreError> {
        let state = self.lock()?;
        let mut settings = state.settings.clone();
        settings.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(settings)
    }
}

#[async_trait]
impl AdminStore for MemoryStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<Admin>, StoreError> {
        Ok(self
            .lock()?
            .admins
            .iter()
            .find(|a| a.username == username)
            .cloned())
    }

    async fn upsert(&self, username: &str, password_hash: &str) -> Result<Admin, StoreError> {
        let mut state = self.lock()?;
        if let Some(existing) = state.admins.iter_mut().find(|a| a.username == username) {
            existing.password_hash = password_hash.to_string();
            return Ok(existing.clone());
        }
        let row = Admin {
            id: state.next_id(),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        state.admins.push(row.clone());
        Ok(row)
    }
}

#[async_trait]
impl HealthProbe for MemoryStore {
    async fn ping(&self) -> Result<(), StoreError> {
        self.lock().map(|_| ())
    }
}
