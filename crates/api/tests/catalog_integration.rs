//! Integration tests for the service catalog.

mod common;

use axum::http::{Method, StatusCode};
use common::{
    admin_cookie, create_test_app, get_request, json_request, json_request_with_cookie,
    order_payload, parse_response_body, request_with_cookie,
};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_seed_then_browse_catalog() {
    let (app, _) = create_test_app().await;
    let cookie = admin_cookie(&app).await;

    let response = app
        .clone()
        .oneshot(request_with_cookie(Method::POST, "/api/admin/seed", &cookie))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["data"], json!({"services": 4, "settings": 1}));

    let response = app.clone().oneshot(get_request("/api/platforms")).await.unwrap();
    let body = parse_response_body(response).await;
    assert_eq!(body["data"], json!(["Facebook", "Instagram", "YouTube"]));

    let response = app
        .clone()
        .oneshot(get_request("/api/services?platform=instagram"))
        .await
        .unwrap();
    let body = parse_response_body(response).await;
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Followers", "Likes"]);

    let response = app.oneshot(get_request("/api/services")).await.unwrap();
    let body = parse_response_body(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_admin_service_lifecycle() {
    let (app, _) = create_test_app().await;
    let cookie = admin_cookie(&app).await;

    let response = app
        .clone()
        .oneshot(json_request_with_cookie(
            Method::POST,
            "/api/admin/services",
            json!({"platform": "TikTok", "name": "Views", "price": 0.02}),
            &cookie,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = parse_response_body(response).await;
    let id = body["data"]["id"].as_i64().unwrap();
    assert_eq!(body["data"]["active"], true);

    let response = app
        .clone()
        .oneshot(json_request_with_cookie(
            Method::PATCH,
            &format!("/api/admin/services/{}", id),
            json!({"price": 0.03}),
            &cookie,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["data"]["price"], 0.03);
    assert_eq!(body["data"]["name"], "Views");

    let response = app
        .clone()
        .oneshot(json_request_with_cookie(
            Method::PATCH,
            &format!("/api/admin/services/{}", id),
            json!({}),
            &cookie,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(parse_response_body(response).await["error"], "No fields to update");

    let mut payload = order_payload("jane@example.com");
    payload["platform"] = json!("TikTok");
    payload["service"] = json!("Views");
    let response = app
        .clone()
        .oneshot(json_request(Method::POST, "/api/orders", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let order_id = parse_response_body(response).await["data"]["orderId"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .clone()
        .oneshot(request_with_cookie(
            Method::DELETE,
            &format!("/api/admin/services/{}", id),
            &cookie,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(parse_response_body(response).await["data"]["active"], false);

    // Orders naming a deactivated service still resolve unchanged.
    let response = app
        .clone()
        .oneshot(get_request(&format!("/api/orders/{}", order_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["data"]["platform"], "TikTok");
    assert_eq!(body["data"]["service"], "Views");
    assert_eq!(body["data"]["status"], "Pending");

    // Deactivated services disappear from the storefront.
    let response = app
        .clone()
        .oneshot(get_request("/api/services?platform=TikTok"))
        .await
        .unwrap();
    assert_eq!(parse_response_body(response).await["data"], json!([]));

    let response = app
        .oneshot(request_with_cookie(
            Method::DELETE,
            "/api/admin/services/9999",
            &cookie,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(parse_response_body(response).await["error"], "Service not found");
}

#[tokio::test]
async fn test_service_id_must_be_positive_integer() {
    let (app, _) = create_test_app().await;
    let cookie = admin_cookie(&app).await;

    for raw in ["abc", "0", "-3"] {
        let response = app
            .clone()
            .oneshot(request_with_cookie(
                Method::DELETE,
                &format!("/api/admin/services/{}", raw),
                &cookie,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(parse_response_body(response).await["error"], "Invalid service id");
    }
}

#[tokio::test]
async fn test_create_service_validation() {
    let (app, _) = create_test_app().await;
    let cookie = admin_cookie(&app).await;

    let response = app
        .oneshot(json_request_with_cookie(
            Method::POST,
            "/api/admin/services",
            json!({"platform": "Instagram", "name": "Likes", "price": -1.0}),
            &cookie,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(parse_response_body(response).await["error"], "Price must not be negative");
}
