//! Startup admin account.
//!
//! When `admin.bootstrap_username` and `admin.bootstrap_password` are set,
//! the account is upserted on every start, so rotating the configured
//! password rotates the stored hash.

use domain::services::admin_auth::create_admin;
use domain::Stores;
use tracing::{info, warn};

use crate::config::AdminBootstrapConfig;

#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Failed to bootstrap admin: {0}")]
    Admin(String),
}

/// Returns `Ok(false)` when bootstrap is not configured.
pub async fn bootstrap_admin(
    stores: &Stores,
    config: &AdminBootstrapConfig,
) -> Result<bool, BootstrapError> {
    if config.bootstrap_username.is_empty() {
        return Ok(false);
    }

    if config.bootstrap_password.is_empty() {
        warn!(
            "SB__ADMIN__BOOTSTRAP_USERNAME is set but SB__ADMIN__BOOTSTRAP_PASSWORD is empty - skipping bootstrap"
        );
        return Ok(false);
    }

    let result = create_admin(stores, &config.bootstrap_username, &config.bootstrap_password).await;
    if !result.success {
        return Err(BootstrapError::Admin(result.error.unwrap_or_default()));
    }

    info!(username = %config.bootstrap_username, "Bootstrap admin ensured");
    warn!(
        "SECURITY: Remove SB__ADMIN__BOOTSTRAP_PASSWORD from configuration after initial setup"
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::services::admin_auth::admin_login;
    use domain::store::memory::MemoryStore;

    fn config(username: &str, password: &str) -> AdminBootstrapConfig {
        AdminBootstrapConfig {
            bootstrap_username: username.to_string(),
            bootstrap_password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_bootstrap_skipped_when_unconfigured() {
        let stores = MemoryStore::new().into_stores();
        assert!(!bootstrap_admin(&stores, &config("", "")).await.unwrap());
        assert!(!bootstrap_admin(&stores, &config("admin", "")).await.unwrap());
        assert!(!admin_login(&stores, "admin", "").await.success);
    }

    #[tokio::test]
    async fn test_bootstrap_creates_login() {
        let stores = MemoryStore::new().into_stores();
        assert!(bootstrap_admin(&stores, &config("admin", "bootstrap-secret"))
            .await
            .unwrap());
        assert!(admin_login(&stores, "admin", "bootstrap-secret").await.success);
    }

    #[tokio::test]
    async fn test_bootstrap_reports_storage_failure() {
        let stores = MemoryStore::failing().into_stores();
        let err = bootstrap_admin(&stores, &config("admin", "bootstrap-secret"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to create admin"));
    }
}
