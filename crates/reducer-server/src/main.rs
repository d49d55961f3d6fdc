use anyhow::{Context, Result};
use clap::Parser;
use reducer_server::{app, Config};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!(
        "listening on http://{} (max_upload_bytes={})",
        addr, config.max_upload_bytes
    );
    axum::serve(listener, app(&config))
        .await
        .context("server error")?;
    Ok(())
}
