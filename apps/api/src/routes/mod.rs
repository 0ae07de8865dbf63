pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::behavioural::handlers::handle_behavioural_question;
use crate::coding::handlers::handle_check_code;
use crate::performance::handlers::handle_analyze_performance;
use crate::progress::handlers::handle_progress;
use crate::responses::handlers::handle_append_response;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/test-db", get(health::test_db_handler))
        // Interview stages
        .route("/api/behavioral-ai", post(handle_behavioural_question))
        .route("/api/check-code", post(handle_check_code))
        .route("/api/progress", post(handle_progress))
        // Responses and reporting
        .route("/api/responses", post(handle_append_response))
        .route("/api/analyze-performance", post(handle_analyze_performance))
        .with_state(state)
}
