//! Site settings endpoint handlers.

use axum::extract::{Path, State};
use domain::models::setting::is_valid_setting_key;
use domain::models::{Setting, UpdateSettingRequest};
use domain::services::settings;

use crate::app::AppState;
use crate::error::{ActionReply, ApiError};
use crate::extractors::ValidatedJson;

fn check_key(key: &str) -> Result<(), ApiError> {
    if is_valid_setting_key(key) {
        Ok(())
    } else {
        Err(ApiError::Validation("Invalid setting key".to_string()))
    }
}

/// GET /api/settings/:key
pub async fn get_setting(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<ActionReply<Setting>, ApiError> {
    check_key(&key)?;
    Ok(settings::get_setting(&state.stores, &key).await.into())
}

/// GET /api/admin/settings
pub async fn list_settings(State(state): State<AppState>) -> ActionReply<Vec<Setting>> {
    settings::get_all_settings(&state.stores).await.into()
}

/// PUT /api/admin/settings/:key
pub async fn update_setting(
    State(state): State<AppState>,
    Path(key): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateSettingRequest>,
) -> Result<ActionReply<Setting>, ApiError> {
    check_key(&key)?;
    Ok(settings::update_setting(&state.stores, &key, &request.value).await.into())
}
