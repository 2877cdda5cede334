//! Solana JSON-RPC protocol implementation.
//!
//! This module contains the value types and JSON-RPC 2.0 envelopes
//! used when talking to a Solana node over HTTP.

pub mod message;
pub mod types;

// Re-export commonly used items
pub use message::{
    Request, Response, RpcErrorObject, RpcResponse, RpcResponseContext, JSONRPC_VERSION,
};
pub use types::{Commitment, Pubkey, MAX_BASE58_LEN, PUBKEY_BYTES};
