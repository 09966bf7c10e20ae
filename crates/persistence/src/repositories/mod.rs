//! Repository implementations for database operations.
//!
//! Each repository exposes inherent sqlx queries returning entities and
//! implements the matching domain store trait on top of them.

pub mod admin;
pub mod health;
pub mod order;
pub mod service;
pub mod setting;
pub mod testimonial;
pub mod user;

pub use admin::AdminRepository;
pub use health::HealthRepository;
pub use order::OrderRepository;
pub use service::ServiceRepository;
pub use setting::SettingRepository;
pub use testimonial::TestimonialRepository;
pub use user::UserRepository;
