//! Order endpoint handlers.

use axum::extract::{Path, Query, State};
use domain::models::{CreateOrderRequest, CreatedOrder, Order, UpdateOrderStatusRequest};
use domain::services::orders;
use serde::Deserialize;

use super::{parse_id, parse_order_id};
use crate::app::AppState;
use crate::error::{ActionReply, ApiError};
use crate::extractors::ValidatedJson;
use crate::middleware::metrics::{record_order_created, record_order_status_changed};

#[derive(Debug, Deserialize)]
pub struct OrdersQuery {
    pub email: Option<String>,
}

/// POST /api/orders
pub async fn create_order(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateOrderRequest>,
) -> ActionReply<CreatedOrder> {
    let platform = request.platform.clone();
    let reply = ActionReply::created(orders::create_order(&state.stores, request).await);
    if reply.is_success() {
        record_order_created(&platform);
    }
    reply
}

/// GET /api/orders/:order_id
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<ActionReply<Order>, ApiError> {
    let order_id = parse_order_id(&order_id)?;
    Ok(orders::get_order_by_id(&state.stores, order_id).await.into())
}

/// GET /api/orders?email=
pub async fn list_orders_by_email(
    State(state): State<AppState>,
    Query(query): Query<OrdersQuery>,
) -> Result<ActionReply<Vec<Order>>, ApiError> {
    let email = query
        .email
        .filter(|e| !e.trim().is_empty())
        .ok_or_else(|| ApiError::Validation("email query parameter is required".to_string()))?;
    Ok(orders::get_orders_by_email(&state.stores, email.trim()).await.into())
}

/// GET /api/users/:uid/orders
pub async fn list_user_orders(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> ActionReply<Vec<Order>> {
    orders::get_user_orders(&state.stores, &uid).await.into()
}

/// GET /api/admin/orders
pub async fn list_all_orders(State(state): State<AppState>) -> ActionReply<Vec<Order>> {
    orders::get_all_orders(&state.stores).await.into()
}

/// GET /api/admin/users/:user_id/orders
pub async fn list_orders_for_user_id(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<ActionReply<Vec<Order>>, ApiError> {
    let user_id = parse_id(&user_id, "user")?;
    Ok(orders::get_orders_by_user_id(&state.stores, user_id).await.into())
}

/// PUT /api/admin/orders/:order_id/status
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateOrderStatusRequest>,
) -> Result<ActionReply<Order>, ApiError> {
    let order_id = parse_order_id(&order_id)?;
    let reply: ActionReply<Order> =
        orders::update_order_status(&state.stores, order_id, request.status)
            .await
            .into();
    if reply.is_success() {
        record_order_status_changed(request.status.as_str());
    }
    Ok(reply)
}
