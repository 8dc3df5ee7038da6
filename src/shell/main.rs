use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, fmt};

use users_graphql::shell::config::Config;
use users_graphql::shell::graphql::{AppState, build_schema};
use users_graphql::shell::http;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env().context("invalid configuration")?;

    let state = AppState::seeded(config.event_bus_capacity);
    let schema = build_schema(state);
    let app = http::router(schema, &config);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("GraphQL endpoint: http://{}{}", addr, config.graphql_path);
    tracing::info!("Subscriptions endpoint: ws://{}{}", addr, config.subscriptions_path);
    axum::serve(listener, app).await?;
    Ok(())
}
