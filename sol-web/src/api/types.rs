//! JSON-serializable API response types.
//!
//! Balances are serialized as fixed-precision strings, never as floats.

use serde::Serialize;

/// Wallet balance response.
#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    /// Balance in SOL, formatted with four decimal places.
    pub balance: String,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub rpc_healthy: bool,
}
