//! # Server Binary Entry Point
//!
//! Thin wrapper that configures and runs the interactive server.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin server -- --config config/server.toml
//! cargo run --bin server -- --address 127.0.0.1 --port 8080
//! ```
//!
//! The server will:
//! 1. Load the endpoint configuration (TOML file, CLI overrides, or the
//!    built-in 127.0.0.1:8080 default)
//! 2. Validate the address and port and bind its socket
//! 3. Wait up to 20 seconds at a time for a datagram, then prompt the
//!    operator for the reply to send back to that sender
//! 4. Keep looping until a send fails, a message is invalid, or input ends

use clap::Parser;
use log::info;

use udp_courier::common::config::{load_config, EndpointConfig};
use udp_courier::utils::logging::init_logger;
use udp_courier::Server;

/// Command-line arguments for the server binary
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the endpoint configuration file (TOML format)
    #[arg(short, long)]
    config: Option<String>,

    /// Address to bind (overrides the configuration file)
    #[arg(long)]
    address: Option<String>,

    /// Port to bind (overrides the configuration file)
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

    let mut server = Server::bind(&config.endpoint.address, config.endpoint.port).await?;
    info!("✅ Server listening on {}", server.local_addr()?);

    server.run().await?;

    Ok(())
}
