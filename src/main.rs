//! Live Companion API - Main Entry Point

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use live_companion_api::infrastructure::driven_adapters::config::AppConfig;
use live_companion_api::infrastructure::driven_adapters::database;
use live_companion_api::infrastructure::driven_adapters::{
    PostgresFollowRepository, PostgresUpdateInfoRepository, PostgresUserRepository,
};
use live_companion_api::infrastructure::driving_adapters::api_rest::handlers::accounts;
use live_companion_api::infrastructure::driving_adapters::api_rest::{
    build_router, rate_limit, AppState,
};

/// Initialize tracing; `LOG_FORMAT=json` switches to JSON lines
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "live_companion_api=debug,tower_http=debug".into());
    let json = std::env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::info!("Configuration loaded successfully");

    // Create database connection pool
    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    // Run migrations
    database::run_migrations(&pool).await?;
    tracing::info!("Database migrations completed");

    // Create repositories and use cases
    let app_state = AppState::new(
        Arc::new(PostgresUserRepository::new(pool.clone())),
        Arc::new(PostgresFollowRepository::new(pool.clone())),
        Arc::new(PostgresUpdateInfoRepository::new(pool)),
    );

    // Rate limit credential endpoints per client IP
    let governor_config = rate_limit::governor_config(&config.rate_limit)
        .ok_or_else(|| anyhow::anyhow!("rate_limit values must be greater than zero"))?;
    let limiter = governor_config.limiter().clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(60));
        loop {
            interval.tick().await;
            limiter.retain_recent();
        }
    });

    let accounts = rate_limit::rate_limited(accounts::router(), governor_config);
    let app = build_router(accounts, app_state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
