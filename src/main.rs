use std::sync::Arc;

use anyhow::Context;
use school_api::{
    db::{create_pool, run_migrations},
    routes::create_router,
    state::{AppState, Config},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,school_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Arc::new(Config::from_env()?);

    tracing::info!("Connecting to database at {}...", config.redacted_database_url());
    let db = create_pool(&config.database_url, config.database_max_connections)
        .await
        .with_context(|| {
            format!(
                "failed to connect to database at {}; check that PostgreSQL is running and DATABASE_URL is correct",
                config.redacted_database_url()
            )
        })?;

    tracing::info!("Running migrations...");
    run_migrations(&db).await.context("failed to run migrations")?;

    let state = AppState::new(db, config.clone());
    let app = create_router(state);

    let addr = config.bind_addr();
    tracing::info!("Server starting on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
