//! Error types for the Solana RPC client.
//!
//! All error types implement `std::error::Error` for compatibility
//! with error handling frameworks like `anyhow` and `thiserror`.

use std::error::Error;
use std::fmt;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Main error type for client operations.
#[derive(Debug)]
pub enum ClientError {
    /// The configured endpoint is not a valid URL.
    InvalidEndpoint(String),
    /// Transport-level error (connect, send, receive, timeout).
    Transport(reqwest::Error),
    /// The node answered with a non-success HTTP status.
    Status(u16),
    /// The node answered with a JSON-RPC error object.
    Rpc {
        /// JSON-RPC error code.
        code: i64,
        /// Error message reported by the node.
        message: String,
    },
    /// The reply could not be understood.
    Protocol(ProtocolError),
}

impl ClientError {
    /// Returns true if the error happened before a reply was received.
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::InvalidEndpoint(msg) => write!(f, "invalid endpoint: {}", msg),
            ClientError::Transport(e) => write!(f, "transport error: {}", e),
            ClientError::Status(code) => write!(f, "node returned HTTP status {}", code),
            ClientError::Rpc { code, message } => {
                write!(f, "rpc error {}: {}", code, message)
            }
            ClientError::Protocol(e) => write!(f, "protocol error: {}", e),
        }
    }
}

impl Error for ClientError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ClientError::Transport(e) => Some(e),
            ClientError::Protocol(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ProtocolError> for ClientError {
    fn from(err: ProtocolError) -> Self {
        ClientError::Protocol(err)
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err)
    }
}

/// Reply-level errors.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProtocolError {
    /// Reply carried neither a result nor an error.
    MissingResult,
    /// Reply id does not match the request id.
    UnexpectedReply,
    /// Reply body is not a valid JSON-RPC envelope.
    InvalidBody(String),
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::MissingResult => write!(f, "reply has no result"),
            ProtocolError::UnexpectedReply => write!(f, "unexpected reply"),
            ProtocolError::InvalidBody(msg) => write!(f, "invalid reply body: {}", msg),
        }
    }
}

impl Error for ProtocolError {}

impl From<serde_json::Error> for ProtocolError {
    fn from(err: serde_json::Error) -> Self {
        ProtocolError::InvalidBody(err.to_string())
    }
}

/// Public key parse errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParsePubkeyError {
    /// Input or decoded value has the wrong length.
    WrongSize,
    /// Input is not valid base58.
    Invalid,
}

impl fmt::Display for ParsePubkeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsePubkeyError::WrongSize => write!(f, "string decoded to wrong size for pubkey"),
            ParsePubkeyError::Invalid => write!(f, "invalid base58 string"),
        }
    }
}

impl Error for ParsePubkeyError {}
