//! HTTP-side services.

pub mod admin_bootstrap;
pub mod session_cookie;

pub use admin_bootstrap::{bootstrap_admin, BootstrapError};
pub use session_cookie::SessionCookie;
