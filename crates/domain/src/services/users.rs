//! Customer account actions.

use tracing::debug;

use crate::error::ActionError;
use crate::models::{UpsertUserRequest, User};
use crate::result::ActionResult;
use crate::store::Stores;

/// Records the profile reported at sign-in; repeated calls with the same
/// `uid` overwrite email, name and photo.
pub async fn upsert_user(stores: &Stores, request: UpsertUserRequest) -> ActionResult<User> {
    let result = stores
        .users
        .upsert(&request)
        .await
        .map_err(ActionError::storage("Failed to save user"));

    if let Ok(user) = &result {
        debug!(user_id = user.id, "User profile synced");
    }

    result.into()
}

pub async fn get_user_by_uid(stores: &Stores, uid: &str) -> ActionResult<User> {
    stores
        .users
        .find_by_uid(uid)
        .await
        .map_err(ActionError::storage("Failed to get user"))
        .and_then(|user| user.ok_or(ActionError::NotFound("User")))
        .into()
}

pub async fn get_user_by_email(stores: &Stores, email: &str) -> ActionResult<User> {
    stores
        .users
        .find_by_email(email)
        .await
        .map_err(ActionError::storage("Failed to get user"))
        .and_then(|user| user.ok_or(ActionError::NotFound("User")))
        .into()
}

pub async fn get_all_users(stores: &Stores) -> ActionResult<Vec<User>> {
    stores
        .users
        .list_all()
        .await
        .map_err(ActionError::storage("Failed to get users"))
        .into()
}
