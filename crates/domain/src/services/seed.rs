//! Default catalog and settings.

use serde::Serialize;
use tracing::info;

use crate::error::ActionError;
use crate::models::CreateServiceRequest;
use crate::result::ActionResult;
use crate::store::Stores;

/// (platform, name, price) entries installed by [`seed_catalog`].
pub const DEFAULT_SERVICES: [(&str, &str, f64); 4] = [
    ("Instagram", "Followers", 0.50),
    ("Instagram", "Likes", 0.50),
    ("Facebook", "Page Likes", 0.50),
    ("YouTube", "Subscribers", 0.50),
];

/// (key, value) entries installed by [`seed_catalog`].
pub const DEFAULT_SETTINGS: [(&str, &str); 1] = [("site_name", "SocialBoost")];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedSummary {
    pub services: usize,
    pub settings: usize,
}

/// Upserts the default catalog. Safe to run repeatedly.
pub async fn seed_catalog(stores: &Stores) -> ActionResult<SeedSummary> {
    let mut summary = SeedSummary {
        services: 0,
        settings: 0,
    };

    for (platform, name, price) in DEFAULT_SERVICES {
        let request = CreateServiceRequest {
            platform: platform.to_string(),
            name: name.to_string(),
            price,
        };
        if let Err(err) = stores.services.upsert(&request).await {
            return ActionResult::fail(ActionError::storage("Failed to seed database")(err));
        }
        summary.services += 1;
    }

    for (key, value) in DEFAULT_SETTINGS {
        if let Err(err) = stores.settings.upsert(key, value).await {
            return ActionResult::fail(ActionError::storage("Failed to seed database")(err));
        }
        summary.settings += 1;
    }

    info!(services = summary.services, settings = summary.settings, "Seed data applied");
    ActionResult::ok(summary)
}
