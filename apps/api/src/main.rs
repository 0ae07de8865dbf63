mod behavioural;
mod coding;
mod config;
mod db;
mod errors;
mod llm_client;
mod models;
mod performance;
mod progress;
mod responses;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::coding::coach::CheckLedger;
use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::budget::TokenBudget;
use crate::llm_client::gateway::LlmGateway;
use crate::llm_client::AnthropicClient;
use crate::responses::store::PgResponseStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Intelliviews API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;
    let store = Arc::new(PgResponseStore::new(db));

    // Initialize LLM client
    let anthropic = AnthropicClient::new(
        config.anthropic_api_key.clone(),
        Duration::from_secs(config.llm_timeout_secs),
    )?;
    let budget = Arc::new(TokenBudget::new(config.token_budget));
    let llm = LlmGateway::new(Arc::new(anthropic), budget);
    info!(
        "LLM client initialized (model: {}, token budget: {})",
        llm_client::MODEL,
        config.token_budget
    );

    let state = AppState {
        store,
        llm,
        check_ledger: Arc::new(CheckLedger::new()),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the interview frontend host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
