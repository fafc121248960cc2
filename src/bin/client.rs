//! # Client Binary Entry Point
//!
//! Thin wrapper that configures and runs the interactive client.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin client -- --config config/client.toml
//! cargo run --bin client -- --address 127.0.0.1 --port 8080
//! ```
//!
//! The client will:
//! 1. Load the endpoint configuration (TOML file, CLI overrides, or the
//!    built-in 127.0.0.1:8080 default)
//! 2. Validate the address and port and open its socket
//! 3. Prompt for a line, send it, and wait up to 20 seconds for the reply
//! 4. Keep looping until a send fails, a reply is invalid, or input ends

use clap::Parser;
use log::info;

use udp_courier::common::config::{load_config, EndpointConfig};
use udp_courier::utils::logging::init_logger;
use udp_courier::Client;

/// Command-line arguments for the client binary
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the endpoint configuration file (TOML format)
    #[arg(short, long)]
    config: Option<String>,

    /// Remote server address (overrides the configuration file)
    #[arg(long)]
    address: Option<String>,

    /// Remote server port (overrides the configuration file)
    #[arg(long)]
    port: Option<u32>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config::<EndpointConfig>(path)?,
        None => EndpointConfig::default(),
    };
    if let Some(address) = args.address {
        config.endpoint.address = address;
    }
    if let Some(port) = args.port {
        config.endpoint.port = port;
    }

    let mut client = Client::connect(&config.endpoint.address, config.endpoint.port).await?;
    info!("✅ Client ready, sending to {}", client.remote_addr());

    client.run().await?;

    Ok(())
}
