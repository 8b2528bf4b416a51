use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use valorant_exporter::{build_router, Config, HttpTransport, Telemetry, ValorantClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("info,valorant_exporter=debug")
            }),
        )
        .init();

    let config = Config::parse();

    let client = ValorantClient::<HttpTransport>::from_config(&config)
        .context("failed to build upstream client")?;
    let app = build_router(client, Arc::new(Telemetry::new()));

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(
        "Starting valorant exporter on http://{addr} (upstream {}/{})",
        config.api_base_url, config.region
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("valorant exporter stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received, draining connections");
}
