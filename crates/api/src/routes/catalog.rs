//! Service catalog endpoint handlers.

use axum::extract::{Path, Query, State};
use domain::models::{CreateServiceRequest, Service, UpdateServiceRequest};
use domain::services::catalog;
use serde::Deserialize;

use super::parse_id;
use crate::app::AppState;
use crate::error::{ActionReply, ApiError};
use crate::extractors::ValidatedJson;

#[derive(Debug, Deserialize)]
pub struct ServicesQuery {
    pub platform: Option<String>,
}

/// GET /api/services[?platform=]
pub async fn list_services(
    State(state): State<AppState>,
    Query(query): Query<ServicesQuery>,
) -> ActionReply<Vec<Service>> {
    let result = match query.platform.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
        Some(platform) => catalog::get_services_by_platform(&state.stores, platform).await,
        None => catalog::get_all_services(&state.stores).await,
    };
    result.into()
}

/// GET /api/platforms
pub async fn list_platforms(State(state): State<AppState>) -> ActionReply<Vec<String>> {
    catalog::get_all_platforms(&state.stores).await.into()
}

/// GET /api/admin/services
pub async fn list_all_services(State(state): State<AppState>) -> ActionReply<Vec<Service>> {
    catalog::get_all_services(&state.stores).await.into()
}

/// POST /api/admin/services
pub async fn create_service(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateServiceRequest>,
) -> ActionReply<Service> {
    ActionReply::created(catalog::create_service(&state.stores, request).await)
}

/// PATCH /api/admin/services/:id
pub async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(patch): ValidatedJson<UpdateServiceRequest>,
) -> Result<ActionReply<Service>, ApiError> {
    let id = parse_id(&id, "service")?;
    Ok(catalog::update_service(&state.stores, id, patch).await.into())
}

/// DELETE /api/admin/services/:id
pub async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ActionReply<Service>, ApiError> {
    let id = parse_id(&id, "service")?;
    Ok(catalog::delete_service(&state.stores, id).await.into())
}
