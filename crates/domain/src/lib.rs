//! Domain layer for the SocialBoost backend.
//!
//! This crate contains:
//! - Domain models (Order, Service, Testimonial, User, Setting, Admin)
//! - The uniform action result shape and error taxonomy
//! - Store traits implemented by the persistence layer
//! - Action services, one function per use case

pub mod error;
pub mod models;
pub mod result;
pub mod services;
pub mod store;

pub use error::{ActionError, StoreError};
pub use result::ActionResult;
pub use store::Stores;
