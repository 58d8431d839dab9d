//! # Routes
//!
//! Axum router configuration for the alias relay.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

/// Create the main application router
///
/// Routes:
/// - POST /create-lnurl - Register an alias (unpaid)
/// - PUT  /update-payment-status/{alias} - Open the payment gate
/// - GET  /.well-known/lnurlp/{alias} - LNURL-pay document for a paid alias
/// - POST /create-order - Create the alias fee invoice
/// - GET  /health - Health check
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check at root
        .route("/health", get(handlers::health))
        .route("/", get(handlers::health))
        // Alias lifecycle
        .route("/create-lnurl", post(handlers::create_lnurl))
        .route(
            "/update-payment-status/{alias}",
            put(handlers::update_payment_status),
        )
        // Lightning address lookup
        .route("/.well-known/lnurlp/{alias}", get(handlers::resolve_alias))
        // Fee invoice
        .route("/create-order", post(handlers::create_order))
        // Middleware
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}
