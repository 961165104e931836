//! API Routes

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn create_router() -> Router {
    let state = AppState::new();

    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Account routes
        .route("/api/v1/accounts", post(handlers::create_account))
        .route("/api/v1/accounts/:account_id", get(handlers::get_account))
        .route(
            "/api/v1/accounts/:account_id/transactions",
            post(handlers::process_transaction),
        )
        .route(
            "/api/v1/accounts/:account_id/transactions",
            get(handlers::list_transactions),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
