//! sol-web: HTTP wallet balance lookup for Solana.
//!
//! Serves `GET /api/wallet-balance?address=<base58>` and answers with the
//! account balance in SOL, e.g. `{ "balance": "1.2345" }`.

use axum::routing::{any, get};
use axum::Router;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

pub mod api;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the application router.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        // API routes
        .route("/api/wallet-balance", any(routes::balance::wallet_balance))
        .route("/health", get(routes::health))
        .fallback(routes::not_found)
        // State
        .with_state(state)
        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
}
