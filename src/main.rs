mod app;
mod config;
mod errors;
mod handlers;
mod middleware;
mod models;
mod services;
mod state;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::{
    config::Config,
    services::CredentialStore,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "smartassess=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load().context("failed to load configuration")?;

    let store = CredentialStore::connect(&config.database, config.auth.bcrypt_cost)
        .await
        .with_context(|| {
            format!(
                "failed to connect to database {} at {}:{}",
                config.database.name, config.database.host, config.database.port
            )
        })?;
    tracing::info!(host = %config.database.host, database = %config.database.name, "Connected to database");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = app::build_router(AppState::new(store, config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Server running on {}", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .context("server error")?;

    Ok(())
}
