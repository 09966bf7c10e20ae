use anyhow::Result;
use tracing::{info, warn};

use socialboost_api::{app, config, middleware, services};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = config::Config::load()?;

    // Initialize logging and the metrics recorder
    middleware::logging::init_logging(&config.logging);
    middleware::init_metrics()?;

    info!("Starting SocialBoost API v{}", env!("CARGO_PKG_VERSION"));

    // Create database pool
    let pool = persistence::db::create_pool(&config.database.pool_config()).await?;

    // Run migrations
    info!("Running database migrations...");
    persistence::db::run_migrations(&pool).await?;
    info!("Migrations completed");

    let stores = persistence::pg_stores(pool);

    services::bootstrap_admin(&stores, &config.admin).await?;

    if config.seed.on_startup {
        let seeded = domain::services::seed::seed_catalog(&stores).await;
        if !seeded.success {
            warn!(error = ?seeded.error, "Startup seed failed");
        }
    }

    // Build application
    let addr = config.socket_addr()?;
    let app = app::create_app(config, stores);

    // Start server
    info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
