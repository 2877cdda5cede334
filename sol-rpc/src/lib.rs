//! Minimal Rust client for the Solana JSON-RPC API.
//!
//! This crate covers the small slice of the API needed to look up account
//! balances: a base58 [`Pubkey`] type, a [`Client`] that speaks JSON-RPC 2.0
//! over HTTP, and lamport/SOL conversion helpers.
//!
//! # Quick Start
//!
//! ```ignore
//! use sol_rpc::{Client, Pubkey};
//!
//! let client = Client::connect("https://api.mainnet-beta.solana.com")?;
//! let key: Pubkey = "So11111111111111111111111111111111111111112".parse()?;
//!
//! let lamports = client.get_balance(&key).await?;
//! println!("{} SOL", sol_rpc::format_sol(lamports, sol_rpc::BALANCE_DECIMALS));
//! ```
//!
//! # Configuration
//!
//! Use the builder pattern for custom configuration:
//!
//! ```ignore
//! use std::time::Duration;
//! use sol_rpc::{Client, Commitment};
//!
//! let client = Client::builder()
//!     .endpoint("http://127.0.0.1:8899")?
//!     .commitment(Commitment::Finalized)
//!     .request_timeout(Duration::from_secs(10))
//!     .build()?;
//! ```

#![warn(missing_docs)]

// Public modules
mod client;
mod error;
pub mod protocol;
mod units;

// Re-export main types
pub use client::{Client, ClientBuilder, DEFAULT_RPC_URL};
pub use error::{ClientError, ParsePubkeyError, ProtocolError, Result};

// Re-export protocol types
pub use protocol::{Commitment, Pubkey};

// Re-export conversion helpers
pub use units::{format_sol, lamports_to_sol, BALANCE_DECIMALS, LAMPORTS_PER_SOL};
