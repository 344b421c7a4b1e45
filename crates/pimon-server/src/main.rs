use anyhow::Result;
use pimon_collector::identity;
use pimon_server::app;
use pimon_server::config::ServerConfig;
use pimon_server::poller::Poller;
use pimon_server::state::AppState;
use std::net::SocketAddr;
use tokio::signal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("pimon=info".parse()?))
        .init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/server.toml".to_string());
    let config = ServerConfig::load(&config_path)?;

    let ip = identity::outbound_ip();
    tracing::info!(
        http_port = config.http_port,
        poll_interval_secs = config.poll_interval_secs,
        hosts = config.hosts.len(),
        dashboard = %format!("http://{ip}:{}", config.http_port),
        "pimon-server starting"
    );
    if config.hosts.is_empty() {
        tracing::warn!("no hosts configured; the dashboard stays empty until hosts are added to the config");
    } else {
        for host in &config.hosts {
            tracing::info!(host = %host, "monitoring host");
        }
    }

    let state = AppState::new(config);

    // Background poll loop; only worth spawning with hosts to sweep.
    let poll_handle = if state.config.hosts.is_empty() {
        None
    } else {
        let poller = Poller::new(state.clone())?;
        Some(tokio::spawn(async move {
            poller.run().await;
        }))
    };

    let addr: SocketAddr = format!("0.0.0.0:{}", state.config.http_port).parse()?;
    let app = app::build_http_app(state.clone());
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("failed to bind {addr}: {e}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            signal::ctrl_c().await.ok();
        })
        .await?;

    if let Some(handle) = poll_handle {
        handle.abort();
    }
    tracing::info!("server stopped");
    Ok(())
}
