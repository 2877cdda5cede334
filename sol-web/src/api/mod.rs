//! JSON API types.

mod types;

pub use types::{BalanceResponse, ErrorResponse, HealthResponse};
