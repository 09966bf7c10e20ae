//! Service catalog actions.

use tracing::info;

use crate::error::ActionError;
use crate::models::{CreateServiceRequest, Service, UpdateServiceRequest};
use crate::result::ActionResult;
use crate::store::Stores;

/// Adds a service. Re-adding an existing (platform, name) pair updates its
/// price and reactivates it instead of failing.
pub async fn create_service(stores: &Stores, request: CreateServiceRequest) -> ActionResult<Service> {
    let result = stores
        .services
        .upsert(&request)
        .await
        .map_err(ActionError::storage("Failed to create service"));

    if let Ok(service) = &result {
        info!(
            service_id = service.id,
            platform = %service.platform,
            name = %service.name,
            price = service.price,
            "Service saved"
        );
    }

    result.into()
}

/// Applies a partial update. An empty patch is rejected without touching storage.
pub async fn update_service(
    stores: &Stores,
    id: i64,
    patch: UpdateServiceRequest,
) -> ActionResult<Service> {
    if patch.is_empty() {
        return ActionResult::fail(ActionError::NothingToUpdate);
    }

    stores
        .services
        .update(id, &patch)
        .await
        .map_err(ActionError::storage("Failed to update service"))
        .and_then(|service| service.ok_or(ActionError::NotFound("Service")))
        .into()
}

/// Soft delete. The row is kept so past orders still resolve.
pub async fn delete_service(stores: &Stores, id: i64) -> ActionResult<Service> {
    let result = stores
        .services
        .deactivate(id)
        .await
        .map_err(ActionError::storage("Failed to delete service"))
        .and_then(|service| service.ok_or(ActionError::NotFound("Service")));

    if let Ok(service) = &result {
        info!(service_id = service.id, "Service deactivated");
    }

    result.into()
}

pub async fn get_services_by_platform(stores: &Stores, platform: &str) -> ActionResult<Vec<Service>> {
    stores
        .services
        .list_active_by_platform(platform)
        .await
        .map_err(ActionError::storage("Failed to get services"))
        .into()
}

pub async fn get_all_services(stores: &Stores) -> ActionResult<Vec<Service>> {
    stores
        .services
        .list_active()
        .await
        .map_err(ActionError::storage("Failed to get services"))
        .into()
}

pub async fn get_all_platforms(stores: &Stores) -> ActionResult<Vec<String>> {
    stores
        .services
        .list_platforms()
        .await
        .map_err(ActionError::storage("Failed to get platforms"))
        .into()
}
