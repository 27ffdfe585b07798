use clap::Parser;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, fmt};

use builds::shared::infrastructure::build_store::in_memory::InMemoryBuildStore;
use builds::shell::config::Config;
use builds::shell::http::router;
use builds::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::parse();
    let store = Arc::new(InMemoryBuildStore::new());
    let app = router(AppState::new(store));

    let listener = TcpListener::bind(config.http_addr).await?;
    tracing::info!("builds API: http://{}/builds", config.http_addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", config.http_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
