//! Site settings actions.

use tracing::info;

use crate::error::ActionError;
use crate::models::Setting;
use crate::result::ActionResult;
use crate::store::Stores;

pub async fn get_setting(stores: &Stores, key: &str) -> ActionResult<Setting> {
    stores
        .settings
        .get(key)
        .await
        .map_err(ActionError::storage("Failed to get setting"))
        .and_then(|setting| setting.ok_or(ActionError::NotFound("Setting")))
        .into()
}

/// Inserts or overwrites a setting value.
pub async fn update_setting(stores: &Stores, key: &str, value: &str) -> ActionResult<Setting> {
    let result = stores
        .settings
        .upsert(key, value)
        .await
        .map_err(ActionError::storage("Failed to update setting"));

    if result.is_ok() {
        info!(key = %key, "Setting updated");
    }

    result.into()
}

pub async fn get_all_settings(stores: &Stores) -> ActionResult<Vec<Setting>> {
    stores
        .settings
        .list_all()
        .await
        .map_err(ActionError::storage("Failed to get settings"))
        .into()
}
