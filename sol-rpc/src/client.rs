//! Solana RPC client.
//!
//! This module provides the main [`Client`] type for querying a Solana
//! node over JSON-RPC.
//!
//! # Example
//!
//! ```ignore
//! use sol_rpc::{Client, Pubkey};
//!
//! let client = Client::connect("https://api.mainnet-beta.solana.com")?;
//! let key: Pubkey = "So11111111111111111111111111111111111111112".parse()?;
//! let lamports = client.get_balance(&key).await?;
//! println!("{} SOL", sol_rpc::format_sol(lamports, 4));
//! ```

use std::time::Duration;

use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::error::{ClientError, ProtocolError, Result};
use crate::protocol::{Commitment, Pubkey, Request, Response, RpcResponse};

/// Public mainnet-beta endpoint.
pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

/// Solana JSON-RPC client.
///
/// Cheap to clone; clones share the underlying HTTP connection pool.
/// Every call is a single request with no retry.
#[derive(Clone, Debug)]
pub struct Client {
    /// Node endpoint.
    endpoint: Url,
    /// Commitment passed with queries, if any.
    commitment: Option<Commitment>,
    /// HTTP transport.
    http: reqwest::Client,
}

impl Client {
    /// Create a client for the given endpoint with default settings.
    ///
    /// No network traffic happens until the first call.
    ///
    /// # Example
    ///
    /// ```
    /// let client = sol_rpc::Client::connect("http://127.0.0.1:8899").unwrap();
    /// assert_eq!(client.endpoint().as_str(), "http://127.0.0.1:8899/");
    /// ```
    pub fn connect(endpoint: &str) -> Result<Self> {
        Self::builder().endpoint(endpoint)?.build()
    }

    /// Create a client builder for custom configuration.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let client = Client::builder()
    ///     .endpoint("http://127.0.0.1:8899")?
    ///     .commitment(Commitment::Finalized)
    ///     .request_timeout(Duration::from_secs(10))
    ///     .build()?;
    /// ```
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Get the node endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Get the configured commitment.
    pub fn commitment(&self) -> Option<Commitment> {
        self.commitment
    }

    /// Get the balance of an account, in lamports.
    pub async fn get_balance(&self, pubkey: &Pubkey) -> Result<u64> {
        let params = balance_params(pubkey, self.commitment);
        let response: RpcResponse<u64> = self.call("getBalance", params).await?;
        Ok(response.value)
    }

    /// Check node health.
    ///
    /// Succeeds when the node reports itself as `ok`.
    pub async fn get_health(&self) -> Result<()> {
        let status: String = self.call("getHealth", json!([])).await?;
        if status == "ok" {
            Ok(())
        } else {
            let msg = format!("unexpected health status '{}'", status);
            Err(ProtocolError::InvalidBody(msg).into())
        }
    }

    /// Send a single JSON-RPC call and decode its result.
    async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T> {
        let id = next_request_id();
        let request = Request::new(id, method, params);

        let reply = self
            .http
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await?;

        let status = reply.status();
        let body = reply.bytes().await?;

        decode_reply(status, &body, id)
    }
}

/// Largest integer a JSON number keeps exactly when it passes through an f64.
const MAX_SAFE_ID: u64 = (1 << 53) - 1;

/// Pick a random request id that survives JavaScript-based proxies unchanged.
fn next_request_id() -> u64 {
    rand::random::<u64>() & MAX_SAFE_ID
}

/// Positional params for `getBalance`.
fn balance_params(pubkey: &Pubkey, commitment: Option<Commitment>) -> Value {
    match commitment {
        Some(commitment) => json!([pubkey.to_string(), { "commitment": commitment }]),
        None => json!([pubkey.to_string()]),
    }
}

/// Decode a reply body for request `id`.
///
/// A JSON-RPC error object wins regardless of HTTP status. Otherwise a
/// non-success status is reported as [`ClientError::Status`], even when the
/// body happens to be some other JSON document.
fn decode_reply<T: DeserializeOwned>(status: StatusCode, body: &[u8], id: u64) -> Result<T> {
    let response: Response<T> = match serde_json::from_slice(body) {
        Ok(response) => response,
        Err(_) if !status.is_success() => return Err(ClientError::Status(status.as_u16())),
        Err(e) => return Err(ProtocolError::from(e).into()),
    };

    if !status.is_success() && response.error.is_none() {
        return Err(ClientError::Status(status.as_u16()));
    }

    response.into_result(id)
}

/// Builder for [`Client`].
#[derive(Debug)]
pub struct ClientBuilder {
    endpoint: String,
    commitment: Option<Commitment>,
    request_timeout: Option<Duration>,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_RPC_URL.to_string(),
            commitment: None,
            request_timeout: None,
        }
    }

    /// Set the node endpoint.
    pub fn endpoint(mut self, url: &str) -> Result<Self> {
        let url = url.trim();
        if url.is_empty() {
            return Err(ClientError::InvalidEndpoint("no endpoint provided".into()));
        }

        parse_endpoint(url)?;
        self.endpoint = url.to_string();
        Ok(self)
    }

    /// Set the commitment level used for queries.
    pub fn commitment(mut self, commitment: Commitment) -> Self {
        self.commitment = Some(commitment);
        self
    }

    /// Set a per-request timeout. Without it the HTTP client's default applies.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<Client> {
        let endpoint = parse_endpoint(&self.endpoint)?;

        let mut http = reqwest::Client::builder();
        if let Some(timeout) = self.request_timeout {
            http = http.timeout(timeout);
        }

        Ok(Client {
            endpoint,
            commitment: self.commitment,
            http: http.build()?,
        })
    }
}

/// Parse an endpoint URL.
fn parse_endpoint(url: &str) -> Result<Url> {
    Url::parse(url)
        .map_err(|e| ClientError::InvalidEndpoint(format!("invalid endpoint '{}': {}", url, e)))
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
