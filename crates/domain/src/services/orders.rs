//! Order lifecycle actions.

use tracing::{info, warn};
use uuid::Uuid;

use crate::error::ActionError;
use crate::models::{CreateOrderRequest, CreatedOrder, NewOrder, Order, OrderStatus};
use crate::result::ActionResult;
use crate::store::Stores;

/// Places an order. The status always starts as `Pending`.
pub async fn create_order(stores: &Stores, request: CreateOrderRequest) -> ActionResult<CreatedOrder> {
    let new_order = NewOrder::pending(request);

    let result = stores
        .orders
        .insert(&new_order)
        .await
        .map(CreatedOrder::from)
        .map_err(ActionError::storage("Failed to create order"));

    if let Ok(created) = &result {
        info!(
            order_id = %created.order_id,
            platform = %created.order.platform,
            service = %created.order.service,
            quantity = created.order.quantity,
            "Order created"
        );
    }

    result.into()
}

pub async fn get_order_by_id(stores: &Stores, order_id: Uuid) -> ActionResult<Order> {
    stores
        .orders
        .find_by_order_id(order_id)
        .await
        .map_err(ActionError::storage("Failed to get order"))
        .and_then(|order| order.ok_or(ActionError::NotFound("Order")))
        .into()
}

pub async fn get_orders_by_user_id(stores: &Stores, user_id: i64) -> ActionResult<Vec<Order>> {
    stores
        .orders
        .list_by_user_id(user_id)
        .await
        .map_err(ActionError::storage("Failed to get user orders"))
        .into()
}

/// Orders placed with the given email, matched case-insensitively.
pub async fn get_orders_by_email(stores: &Stores, email: &str) -> ActionResult<Vec<Order>> {
    stores
        .orders
        .list_by_email(email)
        .await
        .map_err(ActionError::storage("Failed to get orders"))
        .into()
}

pub async fn get_all_orders(stores: &Stores) -> ActionResult<Vec<Order>> {
    stores
        .orders
        .list_all()
        .await
        .map_err(ActionError::storage("Failed to get orders"))
        .into()
}

/// Orders of the signed-in customer identified by the identity-provider uid.
pub async fn get_user_orders(stores: &Stores, uid: &str) -> ActionResult<Vec<Order>> {
    let user = match stores.users.find_by_uid(uid).await {
        Ok(Some(user)) => user,
        Ok(None) => return ActionResult::fail(ActionError::NotFound("User")),
        Err(err) => return ActionResult::fail(ActionError::storage("Failed to get user orders")(err)),
    };

    get_orders_by_user_id(stores, user.id).await
}

/// Overwrites the status unconditionally.
pub async fn update_order_status(
    stores: &Stores,
    order_id: Uuid,
    status: OrderStatus,
) -> ActionResult<Order> {
    let result = stores
        .orders
        .update_status(order_id, status)
        .await
        .map_err(ActionError::storage("Failed to update order status"))
        .and_then(|order| order.ok_or(ActionError::NotFound("Order")));

    match &result {
        Ok(order) => info!(order_id = %order.order_id, status = %order.status, "Order status updated"),
        Err(ActionError::NotFound(_)) => {
            warn!(order_id = %order_id, "Status update for unknown order")
        }
        Err(_) => {}
    }

    result.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UpsertUserRequest;
    use crate::store::memory::MemoryStore;
    use std::collections::HashSet;

    fn jane_order() -> CreateOrderRequest {
        CreateOrderRequest {
            user_id: None,
            platform: "Instagram".to_string(),
            service: "Followers".to_string(),
            link: None,
            quantity: 1000,
            total: 500.00,
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            message: None,
            screenshot: None,
        }
    }

    #[tokio::test]
    async fn test_create_then_get_returns_pending_order() {
        let stores = MemoryStore::new().into_stores();

        let created = create_order(&stores, jane_order()).await;
        assert!(created.success);
        let order_id = created.data.unwrap().order_id;

        let fetched = get_order_by_id(&stores, order_id).await.into_data().unwrap();
        assert_eq!(fetched.platform, "Instagram");
        assert_eq!(fetched.service, "Followers");
        assert_eq!(fetched.quantity, 1000);
        assert_eq!(fetched.total, 500.00);
        assert_eq!(fetched.status, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn test_order_ids_are_unique() {
        let stores = MemoryStore::new().into_stores();
        let mut seen = HashSet::new();
        for _ in 0..50 {
            let created = create_order(&stores, jane_order()).await.into_data().unwrap();
            assert!(seen.insert(created.order_id));
        }
    }

    #[tokio::test]
    async fn test_get_unknown_order_is_not_found() {
        let stores = MemoryStore::new().into_stores();
        let result = get_order_by_id(&stores, Uuid::new_v4()).await;
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Order not found"));
    }

    #[tokio::test]
    async fn test_update_status_unknown_order_changes_nothing() {
        let stores = MemoryStore::new().into_stores();
        let existing = create_order(&stores, jane_order()).await.into_data().unwrap();

        let result = update_order_status(&stores, Uuid::new_v4(), OrderStatus::Completed).await;
        assert_eq!(result.failure, Some(ActionError::NotFound("Order")));

        let all = get_all_orders(&stores).await.into_data().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].order_id, existing.order_id);
        assert_eq!(all[0].status, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn test_status_transitions_are_unconstrained() {
        let stores = MemoryStore::new().into_stores();
        let order_id = create_order(&stores, jane_order()).await.into_data().unwrap().order_id;

        for status in [
            OrderStatus::Completed,
            OrderStatus::Pending,
            OrderStatus::InReview,
            OrderStatus::Processing,
        ] {
            let updated = update_order_status(&stores, order_id, status).await;
            assert_eq!(updated.into_data().unwrap().status, status);
        }
    }

    #[tokio::test]
    async fn test_orders_by_email_newest_first_case_insensitive() {
        let stores = MemoryStore::new().into_stores();
        let first = create_order(&stores, jane_order()).await.into_data().unwrap();
        let second = create_order(&stores, jane_order()).await.into_data().unwrap();
        let mut other = jane_order();
        other.email = "sam@example.com".to_string();
        create_order(&stores, other).await;

        let orders = get_orders_by_email(&stores, "JANE@example.com").await.into_data().unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].order_id, second.order_id);
        assert_eq!(orders[1].order_id, first.order_id);
    }

    #[tokio::test]
    async fn test_orders_by_email_empty_is_success() {
        let stores = MemoryStore::new().into_stores();
        let result = get_orders_by_email(&stores, "nobody@example.com").await;
        assert!(result.success);
        assert!(result.data.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_user_orders_by_uid() {
        let stores = MemoryStore::new().into_stores();
        let user = stores
            .users
            .upsert(&UpsertUserRequest {
                uid: "uid-1".to_string(),
                email: "jane@example.com".to_string(),
                name: "Jane".to_string(),
                photo_url: None,
            })
            .await
            .unwrap();

        let mut mine = jane_order();
        mine.user_id = Some(user.id);
        create_order(&stores, mine).await;
        create_order(&stores, jane_order()).await;

        let orders = get_user_orders(&stores, "uid-1").await.into_data().unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].user_id, Some(user.id));

        let missing = get_user_orders(&stores, "uid-unknown").await;
        assert_eq!(missing.error.as_deref(), Some("User not found"));
    }

    #[tokio::test]
    async fn test_storage_failure_is_reported_not_raised() {
        let stores = MemoryStore::failing().into_stores();
        let result = create_order(&stores, jane_order()).await;
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Failed to create order"));
        assert_eq!(result.failure, Some(ActionError::Storage("Failed to create order")));
    }
}
