use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderName, Method},
    middleware,
    routing::{get, patch, post, put},
    Router,
};
use domain::Stores;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{
    metrics_handler, metrics_middleware, require_admin_session, trace_id,
};
use crate::routes::{admin, catalog, health, orders, settings, testimonials, users};
use crate::services::SessionCookie;

#[derive(Clone)]
pub struct AppState {
    pub stores: Stores,
    pub config: Arc<Config>,
    pub session_cookie: SessionCookie,
}

pub fn create_app(config: Config, stores: Stores) -> Router {
    let config = Arc::new(config);

    let state = AppState {
        stores,
        session_cookie: SessionCookie::from_config(&config),
        config: config.clone(),
    };

    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Listed origins may send the admin cookie
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::PATCH,
                Method::DELETE,
            ])
            .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-request-id")])
            .allow_credentials(true)
    };

    // Storefront routes (no session required)
    let public_routes = Router::new()
        .route(
            "/api/orders",
            get(orders::list_orders_by_email).post(orders::create_order),
        )
        .route("/api/orders/:order_id", get(orders::get_order))
        .route("/api/users", post(users::upsert_user))
        .route("/api/users/:uid/orders", get(orders::list_user_orders))
        .route("/api/services", get(catalog::list_services))
        .route("/api/platforms", get(catalog::list_platforms))
        .route(
            "/api/testimonials",
            get(testimonials::list_approved).post(testimonials::submit),
        )
        .route("/api/settings/:key", get(settings::get_setting));

    // Session lifecycle routes stay reachable without a cookie
    let admin_session_routes = Router::new()
        .route("/api/admin/login", post(admin::login))
        .route("/api/admin/logout", post(admin::logout))
        .route("/api/admin/session", get(admin::session));

    // Admin routes (require the admin session cookie)
    let admin_routes = Router::new()
        .route("/api/admin/orders", get(orders::list_all_orders))
        .route(
            "/api/admin/orders/:order_id/status",
            put(orders::update_order_status),
        )
        .route("/api/admin/users", get(users::list_users))
        .route(
            "/api/admin/users/:user_id/orders",
            get(orders::list_orders_for_user_id),
        )
        .route(
            "/api/admin/services",
            get(catalog::list_all_services).post(catalog::create_service),
        )
        .route(
            "/api/admin/services/:id",
            patch(catalog::update_service).delete(catalog::delete_service),
        )
        .route("/api/admin/testimonials", get(testimonials::list_all))
        .route(
            "/api/admin/testimonials/:id/approve",
            post(testimonials::approve),
        )
        .route(
            "/api/admin/testimonials/:id/reject",
            post(testimonials::reject),
        )
        .route("/api/admin/settings", get(settings::list_settings))
        .route("/api/admin/settings/:key", put(settings::update_setting))
        .route("/api/admin/admins", post(admin::create_admin))
        .route("/api/admin/seed", post(admin::seed_database))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_admin_session,
        ));

    let probe_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(probe_routes)
        .merge(public_routes)
        .merge(admin_session_routes)
        .merge(admin_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware)) // Prometheus metrics
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id)) // Request ID and logging
        .layer(cors)
        .with_state(state)
}
