//! Persistence layer for the SocialBoost backend.
//!
//! This crate contains:
//! - Database connection management and migrations
//! - Entity definitions (database row mappings)
//! - Repository implementations of the domain store traits

pub mod db;
pub mod entities;
pub mod metrics;
pub mod repositories;

use domain::Stores;
use sqlx::PgPool;
use std::sync::Arc;

use repositories::{
    AdminRepository, HealthRepository, OrderRepository, ServiceRepository, SettingRepository,
    TestimonialRepository, UserRepository,
};

/// Builds the PostgreSQL-backed store set over one shared pool.
pub fn pg_stores(pool: PgPool) -> Stores {
    Stores {
        users: Arc::new(UserRepository::new(pool.clone())),
        orders: Arc::new(OrderRepository::new(pool.clone())),
        services: Arc::new(ServiceRepository::new(pool.clone())),
        testimonials: Arc::new(TestimonialRepository::new(pool.clone())),
        settings: Arc::new(SettingRepository::new(pool.clone())),
        admins: Arc::new(AdminRepository::new(pool.clone())),
        health: Arc::new(HealthRepository::new(pool)),
    }
}
