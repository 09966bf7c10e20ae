//! Admin route gate.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::app::AppState;
use crate::error::ApiError;

/// Rejects requests without the admin session cookie with 401.
pub async fn require_admin_session(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if !state.session_cookie.is_present(req.headers()) {
        debug!(path = %req.uri().path(), "Admin route without session");
        return ApiError::Unauthorized("Admin session required".to_string()).into_response();
    }

    next.run(req).await
}
