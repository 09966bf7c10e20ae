//! Domain actions for SocialBoost.
//!
//! Each action is a free async function over [`Stores`](crate::store::Stores)
//! that returns an [`ActionResult`](crate::result::ActionResult). Actions
//! never return `Err`; storage failures are logged and folded into a generic
//! failure message.

pub mod admin_auth;
pub mod catalog;
pub mod orders;
pub mod seed;
pub mod settings;
pub mod testimonials;
pub mod users;

pub use seed::{SeedSummary, DEFAULT_SERVICES, DEFAULT_SETTINGS};
