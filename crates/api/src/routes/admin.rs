//! Admin area: login, logout, session probe and account maintenance.

use axum::{extract::State, http::HeaderMap};
use domain::models::{Admin, AdminIdentity, AdminLoginRequest, CreateAdminRequest, SessionStatus};
use domain::services::{admin_auth, seed, SeedSummary};
use domain::ActionResult;
use tracing::info;

use crate::app::AppState;
use crate::error::ActionReply;
use crate::extractors::ValidatedJson;
use crate::middleware::metrics::record_admin_login;

/// POST /api/admin/login
///
/// Sets the session cookie when the credentials check out. Failed attempts
/// answer 401 without touching any existing cookie.
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AdminLoginRequest>,
) -> (HeaderMap, ActionReply<AdminIdentity>) {
    let result =
        admin_auth::admin_login(&state.stores, &request.username, &request.password).await;

    let mut headers = HeaderMap::new();
    if result.success {
        state.session_cookie.add_session_cookie(&mut headers);
        record_admin_login("success");
    } else {
        record_admin_login("failure");
    }

    (headers, result.into())
}

/// POST /api/admin/logout
pub async fn logout(State(state): State<AppState>) -> (HeaderMap, ActionReply<SessionStatus>) {
    let mut headers = HeaderMap::new();
    state.session_cookie.add_clear_cookie(&mut headers);
    info!("Admin session cleared");

    let status = SessionStatus {
        authenticated: false,
    };
    (headers, ActionResult::ok(status).into())
}

/// GET /api/admin/session
pub async fn session(State(state): State<AppState>, headers: HeaderMap) -> ActionReply<SessionStatus> {
    let status = SessionStatus {
        authenticated: state.session_cookie.is_present(&headers),
    };
    ActionResult::ok(status).into()
}

/// POST /api/admin/admins
pub async fn create_admin(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateAdminRequest>,
) -> ActionReply<Admin> {
    ActionReply::created(
        admin_auth::create_admin(&state.stores, &request.username, &request.password).await,
    )
}

/// POST /api/admin/seed
pub async fn seed_database(State(state): State<AppState>) -> ActionReply<SeedSummary> {
    seed::seed_catalog(&state.stores).await.into()
}
