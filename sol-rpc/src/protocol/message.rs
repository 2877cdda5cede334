//! JSON-RPC 2.0 request and response envelopes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ClientError, ProtocolError};

/// JSON-RPC protocol version string.
pub const JSONRPC_VERSION: &str = "2.0";

/// Outgoing JSON-RPC call.
#[derive(Debug, Serialize)]
pub struct Request<'a> {
    /// Always [`JSONRPC_VERSION`].
    pub jsonrpc: &'static str,
    /// Request id echoed back by the node.
    pub id: u64,
    /// Method name, e.g. `getBalance`.
    pub method: &'a str,
    /// Positional parameters.
    pub params: Value,
}

impl<'a> Request<'a> {
    /// Build a request with the given id, method and positional params.
    pub fn new(id: u64, method: &'a str, params: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            method,
            params,
        }
    }
}

/// Error object carried by a failed reply.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct RpcErrorObject {
    /// Error code.
    pub code: i64,
    /// Human-readable message.
    pub message: String,
}

/// Incoming JSON-RPC reply.
#[derive(Debug, Deserialize)]
pub struct Response<T> {
    /// Id of the request this replies to. Null when the node could not parse the request.
    pub id: Option<u64>,
    /// Result on success.
    pub result: Option<T>,
    /// Error on failure.
    pub error: Option<RpcErrorObject>,
}

impl<T> Response<T> {
    /// Extract the result for request `id`.
    ///
    /// An error object takes precedence over the id check, since nodes
    /// reply to unparsable requests with a null id.
    pub fn into_result(self, id: u64) -> Result<T, ClientError> {
        if let Some(err) = self.error {
            return Err(ClientError::Rpc {
                code: err.code,
                message: err.message,
            });
        }

        if self.id != Some(id) {
            return Err(ProtocolError::UnexpectedReply.into());
        }

        self.result
            .ok_or_else(|| ProtocolError::MissingResult.into())
    }
}

/// Slot context attached to context-wrapped results.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
pub struct RpcResponseContext {
    /// Slot at which the query was evaluated.
    pub slot: u64,
}

/// Context-wrapped result, as returned by `getBalance`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct RpcResponse<T> {
    /// Evaluation context.
    pub context: RpcResponseContext,
    /// Result value.
    pub value: T,
}
