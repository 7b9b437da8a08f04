use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use roommate_ledger::shared::infrastructure::table_store::in_memory::InMemoryTableStore;
use roommate_ledger::shell::config::Config;
use roommate_ledger::shell::http::router;
use roommate_ledger::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;
    let addr = config.addr;

    // In-memory store for now
    let state = AppState::new(Arc::new(InMemoryTableStore::new()), config);
    let app = router(state);

    tracing::info!("HTTP API: http://{}", addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
