//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod admin;
pub mod order;
pub mod service;
pub mod setting;
pub mod testimonial;
pub mod user;

pub use admin::AdminEntity;
pub use order::OrderEntity;
pub use service::{PlatformEntity, ServiceEntity};
pub use setting::SettingEntity;
pub use testimonial::TestimonialEntity;
pub use user::UserEntity;
