//! User endpoint handlers.

use axum::extract::State;
use domain::models::{UpsertUserRequest, User};
use domain::services::users;

use crate::app::AppState;
use crate::error::ActionReply;
use crate::extractors::ValidatedJson;

/// POST /api/users
///
/// Called after identity-provider sign-in with the reported profile.
pub async fn upsert_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<UpsertUserRequest>,
) -> ActionReply<User> {
    users::upsert_user(&state.stores, request).await.into()
}

/// GET /api/admin/users
pub async fn list_users(State(state): State<AppState>) -> ActionReply<Vec<User>> {
    users::get_all_users(&state.stores).await.into()
}
