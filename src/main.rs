//! Inference Protocol Gateway
//!
//! Accepts pipeline-oriented predict requests, rewrites them into the V2
//! tensor wire protocol, forwards them to a caller-supplied model-serving
//! endpoint, and translates the response back into the pipeline's output
//! shape. Built with Tokio and Axum.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use inference_gateway::config::loader::load_config;
use inference_gateway::observability::{logging, metrics};
use inference_gateway::{GatewayConfig, HttpServer};

#[derive(Parser)]
#[command(name = "inference-gateway")]
#[command(about = "Protocol-translation gateway for V2 model endpoints", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match cli.config {
        Some(path) => load_config(&path)?,
        None => GatewayConfig::default(),
    };

    logging::init(&config.observability.log_level);

    tracing::info!("inference-gateway v0.1.0 starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        downstream_timeout_secs = config.timeouts.downstream_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for connections");

    let server = HttpServer::new(config)?;
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
