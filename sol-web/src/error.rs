//! Error types for the web API.
//!
//! Every failure past request validation collapses to the same generic 500
//! response. The variants keep the underlying cause so it still reaches the
//! server log.

use crate::api::ErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use sol_rpc::{ClientError, ParsePubkeyError};

/// Body message for non-GET requests.
pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";
/// Body message for a missing or empty `address` parameter.
pub const ADDRESS_REQUIRED: &str = "Wallet address is required";
/// Body message for any failure while fetching a balance.
pub const FETCH_FAILED: &str = "Failed to fetch wallet balance";
/// Body message for unknown routes.
pub const NOT_FOUND: &str = "Not found";

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Request used a method other than GET.
    MethodNotAllowed,
    /// The `address` query parameter is absent or empty.
    MissingAddress,
    /// The address is not a valid base58 public key.
    InvalidAddress {
        address: String,
        source: ParsePubkeyError,
    },
    /// Solana RPC client error.
    Client(ClientError),
    /// No route matched.
    NotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED),
            AppError::MissingAddress => (StatusCode::BAD_REQUEST, ADDRESS_REQUIRED),
            AppError::InvalidAddress { address, source } => {
                tracing::error!(%address, "Invalid wallet address: {}", source);
                (StatusCode::INTERNAL_SERVER_ERROR, FETCH_FAILED)
            }
            AppError::Client(err) => {
                tracing::error!("Solana RPC error: {} ({:?})", err, err);
                (StatusCode::INTERNAL_SERVER_ERROR, FETCH_FAILED)
            }
            AppError::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND),
        };

        (
            status,
            Json(ErrorResponse {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        AppError::Client(err)
    }
}
