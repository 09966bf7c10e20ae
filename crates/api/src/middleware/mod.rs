//! HTTP middleware components.

pub mod admin_session;
pub mod logging;
pub mod metrics;
pub mod trace_id;

pub use admin_session::require_admin_session;
pub use metrics::{init_metrics, metrics_handler, metrics_middleware};
pub use trace_id::{trace_id, RequestId, REQUEST_ID_HEADER};
