//! Admin credential checks and account management.
//!
//! Session state itself lives in a cookie owned by the HTTP layer; this
//! module only decides whether a username/password pair is valid.

use shared::password::{hash_password, verify_password};
use tracing::{error, info, warn};

use crate::error::ActionError;
use crate::models::{Admin, AdminIdentity};
use crate::result::ActionResult;
use crate::store::Stores;

/// Verifies admin credentials against the stored Argon2id hash.
///
/// Unknown usernames, wrong passwords and unreadable hashes all yield the
/// same `Invalid credentials` failure.
pub async fn admin_login(stores: &Stores, username: &str, password: &str) -> ActionResult<AdminIdentity> {
    let admin = match stores.admins.find_by_username(username).await {
        Ok(Some(admin)) => admin,
        Ok(None) => {
            warn!(username = %username, "Admin login for unknown username");
            return ActionResult::fail(ActionError::InvalidCredentials);
        }
        Err(err) => return ActionResult::fail(ActionError::storage("Login failed")(err)),
    };

    match verify_password(password, &admin.password_hash) {
        Ok(true) => {
            info!(admin_id = admin.id, "Admin logged in");
            ActionResult::ok(AdminIdentity {
                username: admin.username,
            })
        }
        Ok(false) => {
            warn!(admin_id = admin.id, "Admin login with wrong password");
            ActionResult::fail(ActionError::InvalidCredentials)
        }
        Err(err) => {
            error!(admin_id = admin.id, error = %err, "Stored admin password hash is unusable");
            ActionResult::fail(ActionError::InvalidCredentials)
        }
    }
}

/// Creates an admin, or rotates the password of an existing username.
pub async fn create_admin(stores: &Stores, username: &str, password: &str) -> ActionResult<Admin> {
    let password_hash = match hash_password(password) {
        Ok(hash) => hash,
        Err(err) => {
            error!(error = %err, "Failed to hash admin password");
            return ActionResult::fail(ActionError::Storage("Failed to create admin"));
        }
    };

    let result = stores
        .admins
        .upsert(username, &password_hash)
        .await
        .map_err(ActionError::storage("Failed to create admin"));

    if let Ok(admin) = &result {
        info!(admin_id = admin.id, username = %admin.username, "Admin account saved");
    }

    result.into()
}
