mod app;
mod config;

use anyhow::Result;
use pimon_collector::{identity, ProcPaths, SnapshotCollector};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::signal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("pimon=info".parse()?))
        .init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/agent.toml".to_string());
    let config = config::AgentConfig::load(&config_path)?;

    let hostname = identity::hostname();
    let ip = identity::outbound_ip();
    tracing::info!(
        hostname = %hostname,
        ip = %ip,
        port = config.port,
        endpoint = %format!("http://{ip}:{}/metrics", config.port),
        "pimon-agent starting"
    );

    let collector = Arc::new(Mutex::new(SnapshotCollector::new(ProcPaths::default())));
    let app = app::build_http_app(collector);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("failed to bind {addr}: {e}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            signal::ctrl_c().await.ok();
        })
        .await?;

    tracing::info!("agent stopped");
    Ok(())
}
