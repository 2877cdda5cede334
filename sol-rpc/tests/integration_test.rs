//! Integration tests for sol-rpc.
//!
//! Tests that talk to a real node require a reachable Solana RPC endpoint.
//! Set the SOL_RPC_URL environment variable to its address
//! (e.g., "http://127.0.0.1:8899" for a local test validator).
//!
//! Run with: SOL_RPC_URL=http://127.0.0.1:8899 cargo test --test integration_test

use sol_rpc::{Client, ClientError, Commitment, Pubkey};

const SYSTEM_PROGRAM: &str = "11111111111111111111111111111111";

/// Get the node endpoint from environment variable.
fn get_rpc_url() -> Option<String> {
    std::env::var("SOL_RPC_URL").ok().filter(|s| !s.is_empty())
}

/// Create a client connected to the configured node.
fn create_client() -> Option<Client> {
    let url = get_rpc_url()?;
    eprintln!("Using Solana node at {}...", url);

    match Client::builder()
        .endpoint(&url)
        .and_then(|b| b.commitment(Commitment::Confirmed).build())
    {
        Ok(client) => Some(client),
        Err(e) => {
            eprintln!("Failed to build client: {:?}", e);
            None
        }
    }
}

#[tokio::test]
async fn test_get_balance_system_program() {
    // Skip if SOL_RPC_URL is not set
    let Some(client) = create_client() else {
        eprintln!("Skipping test: SOL_RPC_URL not set");
        return;
    };

    let key: Pubkey = SYSTEM_PROGRAM.parse().unwrap();
    let lamports = client.get_balance(&key).await.unwrap();
    println!(
        "System program balance: {} lamports ({} SOL)",
        lamports,
        sol_rpc::format_sol(lamports, sol_rpc::BALANCE_DECIMALS)
    );
}

#[tokio::test]
async fn test_get_health() {
    let Some(client) = create_client() else {
        eprintln!("Skipping test: SOL_RPC_URL not set");
        return;
    };

    client.get_health().await.unwrap();
}

#[tokio::test]
async fn test_repeated_balance_queries_are_independent() {
    let Some(client) = create_client() else {
        eprintln!("Skipping test: SOL_RPC_URL not set");
        return;
    };

    let key: Pubkey = SYSTEM_PROGRAM.parse().unwrap();
    let first = client.get_balance(&key).await;
    let second = client.get_balance(&key).await;
    assert!(first.is_ok());
    assert!(second.is_ok());
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Reserve a port, then release it so nothing is listening there
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = Client::connect(&format!("http://{}", addr)).unwrap();
    let key: Pubkey = SYSTEM_PROGRAM.parse().unwrap();

    let err = client.get_balance(&key).await.unwrap_err();
    assert!(err.is_transport(), "expected transport error, got {:?}", err);
    assert!(matches!(err, ClientError::Transport(_)));
}
