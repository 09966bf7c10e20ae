//! Site-wide key/value setting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Setting {
    pub id: i64,
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for writing a setting value.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateSettingRequest {
    #[validate(length(max = 10000, message = "Value must be at most 10000 characters"))]
    pub value: String,
}

/// Maximum accepted setting key length.
pub const MAX_SETTING_KEY_LENGTH: usize = 100;

/// Setting keys are lowercase identifiers such as `site_name`.
pub fn is_valid_setting_key(key: &str) -> bool {
    !key.is_empty()
        && key.len() <= MAX_SETTING_KEY_LENGTH
        && key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '.')
}
