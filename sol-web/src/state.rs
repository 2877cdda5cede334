//! Application state management.

use crate::config::Config;
use sol_rpc::{Client, ClientError};
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    /// Solana RPC client.
    pub client: Client,
    /// Application configuration.
    pub config: Config,
}

impl AppState {
    /// Create new application state for the configured endpoint.
    pub fn new(config: Config) -> Result<Arc<Self>, ClientError> {
        let client = Client::connect(&config.rpc_url)?;

        tracing::info!("Using Solana RPC endpoint {}", client.endpoint());

        Ok(Arc::new(Self { client, config }))
    }
}
