//! Configuration for sol-web.

use std::net::SocketAddr;

/// Application configuration.
///
/// Populated once at startup and shared read-only with every request.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the web server.
    pub address: SocketAddr,
    /// Solana RPC endpoint queried for balances.
    pub rpc_url: String,
}
