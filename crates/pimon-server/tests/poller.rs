mod common;

use axum::routing::get;
use axum::{Json, Router};
use common::{build_test_context, get as http_get, sample_snapshot};
use pimon_common::types::FleetEntry;
use pimon_server::poller::Poller;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Bind a throwaway agent on an ephemeral port.
async fn spawn_mock_agent(app: Router) -> (SocketAddr, JoinHandle<()>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("listener should bind");
    let addr = listener.local_addr().expect("local addr should resolve");
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock agent should serve");
    });
    (addr, handle)
}

fn healthy_agent() -> Router {
    Router::new().route("/metrics", get(|| async { Json(sample_snapshot("test-pi")) }))
}

#[tokio::test]
async fn sweep_marks_reachable_host_online() {
    let (addr, agent) = spawn_mock_agent(healthy_agent()).await;
    let ctx = build_test_context(addr.port(), vec!["127.0.0.1".to_string()]);
    let poller = Poller::new(ctx.state.clone()).expect("poller should build");

    poller.sweep().await;

    let fleet = ctx.state.lock_fleet().clone();
    match fleet.get("127.0.0.1") {
        Some(FleetEntry::Online { snapshot, .. }) => {
            assert_eq!(snapshot.hostname, "test-pi");
            assert_eq!(snapshot.memory.total_mb, 3906);
        }
        other => panic!("expected online entry, got {other:?}"),
    }

    agent.abort();
}

#[tokio::test]
async fn host_going_dark_collapses_to_offline() {
    let (addr, agent) = spawn_mock_agent(healthy_agent()).await;
    let ctx = build_test_context(addr.port(), vec!["127.0.0.1".to_string()]);
    let poller = Poller::new(ctx.state.clone()).expect("poller should build");

    poller.sweep().await;
    let (_, _, body) = http_get(&ctx.app, "/api/metrics").await;
    assert_eq!(body["127.0.0.1"]["status"], "online");

    // Kill the agent and give the listener a beat to actually close.
    agent.abort();
    tokio::time::sleep(Duration::from_millis(50)).await;

    poller.sweep().await;
    let (_, _, body) = http_get(&ctx.app, "/api/metrics").await;
    let entry = &body["127.0.0.1"];
    assert_eq!(entry["status"], "offline");
    assert_eq!(entry["hostname"], "127.0.0.1");
    // Prior snapshot data is discarded, not kept around as stale state.
    assert!(entry.get("cpu").is_none());
    assert!(entry.get("memory").is_none());
}

#[tokio::test]
async fn unreachable_host_is_offline() {
    // Grab a port nothing is listening on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("listener should bind");
    let port = listener.local_addr().expect("local addr should resolve").port();
    drop(listener);

    let ctx = build_test_context(port, vec!["127.0.0.1".to_string()]);
    let poller = Poller::new(ctx.state.clone()).expect("poller should build");

    poller.sweep().await;

    match ctx.state.lock_fleet().get("127.0.0.1") {
        Some(FleetEntry::Offline { hostname, ip }) => {
            assert_eq!(hostname, "127.0.0.1");
            assert_eq!(ip, "127.0.0.1");
        }
        other => panic!("expected offline entry, got {other:?}"),
    };
}

#[tokio::test]
async fn garbage_payload_is_surfaced_as_error() {
    let app = Router::new().route("/metrics", get(|| async { "not a snapshot" }));
    let (addr, agent) = spawn_mock_agent(app).await;
    let ctx = build_test_context(addr.port(), vec!["127.0.0.1".to_string()]);
    let poller = Poller::new(ctx.state.clone()).expect("poller should build");

    poller.sweep().await;

    match ctx.state.lock_fleet().get("127.0.0.1") {
        Some(FleetEntry::Error { error, .. }) => {
            assert!(error.contains("invalid snapshot payload"));
        }
        other => panic!("expected error entry, got {other:?}"),
    }

    agent.abort();
}

#[tokio::test]
async fn sweep_covers_every_configured_host() {
    let (addr, agent) = spawn_mock_agent(healthy_agent()).await;
    let ctx = build_test_context(
        addr.port(),
        vec!["127.0.0.1".to_string(), "127.0.0.2".to_string()],
    );
    let poller = Poller::new(ctx.state.clone()).expect("poller should build");

    poller.sweep().await;

    let fleet = ctx.state.lock_fleet().clone();
    assert_eq!(fleet.len(), 2);
    assert!(matches!(fleet.get("127.0.0.1"), Some(FleetEntry::Online { .. })));
    // Nothing listens on 127.0.0.2, so the same sweep records it offline.
    assert!(matches!(fleet.get("127.0.0.2"), Some(FleetEntry::Offline { .. })));

    agent.abort();
}
