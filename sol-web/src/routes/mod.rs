//! HTTP route handlers.

pub mod balance;

use crate::api::HealthResponse;
use crate::error::AppError;
use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use std::sync::Arc;

/// Health check endpoint.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let rpc_healthy = match state.client.get_health().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Solana node health check failed: {}", e);
            false
        }
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        rpc_healthy,
    })
}

/// Fallback for unknown routes.
pub async fn not_found() -> AppError {
    AppError::NotFound
}
