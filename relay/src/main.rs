use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tokio::net::TcpListener;

use bot_relay::clock::SystemClock;
use bot_relay::config::{Args, RelayConfig};
use bot_relay::gateway;
use bot_relay::relay::Relay;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();
    let config = RelayConfig::from(&args);
    tracing::info!("config: {:?}", &config);

    let relay = Relay::from_config(&config, Arc::new(SystemClock))?;
    if relay.is_echo_only() {
        tracing::warn!("LLM_TOKEN is not set, replies will echo the user text");
    } else {
        tracing::info!("Forwarding to {} with model {}", config.llm_endpoint, config.llm_model);
    }

    tracing::info!("Listening on {}", &args.address);
    let listener = TcpListener::bind(&args.address)
        .await
        .with_context(|| format!("failed to bind {}", args.address))?;

    gateway::serve(listener, relay, shutdown_signal()).await?;
    tracing::info!("Server shutdown");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Error: {:?}", e);
    }
}
