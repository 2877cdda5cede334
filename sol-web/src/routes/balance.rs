//! Wallet balance route handler.

use crate::api::BalanceResponse;
use crate::error::AppError;
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::http::Method;
use axum::Json;
use sol_rpc::{format_sol, Pubkey, BALANCE_DECIMALS};
use std::sync::Arc;

/// Query parameter carrying the wallet address.
const ADDRESS_PARAM: &str = "address";

/// Pick the first `address` value out of the raw query pairs.
///
/// Absent and empty values both count as missing. Repeated keys are allowed.
fn address_param(pairs: Vec<(String, String)>) -> Option<String> {
    pairs
        .into_iter()
        .find(|(key, _)| key == ADDRESS_PARAM)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

/// Look up the SOL balance of a wallet.
///
/// Mounted for every method so that non-GET requests get the JSON 405 body.
pub async fn wallet_balance(
    State(state): State<Arc<AppState>>,
    method: Method,
    query: Option<Query<Vec<(String, String)>>>,
) -> Result<Json<BalanceResponse>, AppError> {
    if method != Method::GET {
        return Err(AppError::MethodNotAllowed);
    }

    let pairs = query.map(|Query(pairs)| pairs).unwrap_or_default();
    let address = address_param(pairs).ok_or(AppError::MissingAddress)?;

    let pubkey = match address.parse::<Pubkey>() {
        Ok(pubkey) => pubkey,
        Err(source) => return Err(AppError::InvalidAddress { address, source }),
    };

    tracing::debug!("Fetching balance for {}", pubkey);

    let lamports = state.client.get_balance(&pubkey).await?;

    Ok(Json(BalanceResponse {
        balance: format_sol(lamports, BALANCE_DECIMALS),
    }))
}
