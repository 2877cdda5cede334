//! sol-web: HTTP wallet balance lookup for Solana.

use clap::Parser;
use std::net::SocketAddr;

use sol_web::config::Config;
use sol_web::state::AppState;

/// HTTP wallet balance lookup for Solana.
#[derive(Parser, Debug)]
#[command(name = "sol-web")]
#[command(about = "HTTP wallet balance lookup for Solana", long_about = None)]
struct Args {
    /// Address to bind the web server.
    #[arg(long, default_value = "127.0.0.1:8080")]
    address: String,

    /// Solana RPC endpoint.
    #[arg(long, env = "RPC_URL", default_value = sol_rpc::DEFAULT_RPC_URL)]
    rpc_url: String,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level)),
        )
        .init();

    let address: SocketAddr = args.address.parse()?;

    let config = Config {
        address,
        rpc_url: args.rpc_url,
    };

    // Create application state
    let state = AppState::new(config)?;

    let app = sol_web::app(state.clone());

    // Start server
    let listener = tokio::net::TcpListener::bind(state.config.address).await?;
    tracing::info!("sol-web listening on http://{}", state.config.address);

    axum::serve(listener, app).await?;

    Ok(())
}
