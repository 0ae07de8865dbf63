use std::sync::Arc;

use crate::coding::coach::CheckLedger;
use crate::config::Config;
use crate::llm_client::gateway::LlmGateway;
use crate::responses::store::ResponseStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Append-only response store. `PgResponseStore` in production.
    pub store: Arc<dyn ResponseStore>,
    /// Owns the process-wide token budget.
    pub llm: LlmGateway,
    pub check_ledger: Arc<CheckLedger>,
    pub config: Config,
}
