#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::Utc;
use pimon_common::types::{CpuMetrics, DiskMetrics, MemoryMetrics, Snapshot};
use pimon_server::app;
use pimon_server::config::ServerConfig;
use pimon_server::state::AppState;
use serde_json::Value;
use tower::util::ServiceExt;

pub struct TestContext {
    pub state: AppState,
    pub app: Router,
}

pub fn build_test_context(agent_port: u16, hosts: Vec<String>) -> TestContext {
    let config = ServerConfig {
        http_port: 8080,
        agent_port,
        poll_interval_secs: 1,
        poll_timeout_secs: 1,
        hosts,
    };
    let state = AppState::new(config);
    let app = app::build_http_app(state.clone());
    TestContext { state, app }
}

pub fn sample_snapshot(hostname: &str) -> Snapshot {
    Snapshot {
        hostname: hostname.to_string(),
        ip: "192.168.1.50".to_string(),
        model: "Raspberry Pi 4 Model B".to_string(),
        timestamp: Utc::now(),
        cpu: CpuMetrics {
            usage_percent: 25.5,
            temperature: Some(42.5),
            load_average: [0.52, 0.58, 0.59],
        },
        memory: MemoryMetrics {
            total_mb: 3906,
            used_mb: 1953,
            available_mb: 1953,
            percent: 50.0,
        },
        disk: DiskMetrics {
            total_gb: 29.1,
            used_gb: 12.3,
            free_gb: 16.8,
            percent: 42.3,
        },
        uptime: "1d 2h 3m".to_string(),
    }
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Option<String>, Value) {
    let resp = app
        .clone()
        .oneshot(
            Request::get(uri)
                .body(Body::empty())
                .expect("request should build"),
        )
        .await
        .expect("request should be handled");

    let status = resp.status();
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should read");
    let json = serde_json::from_slice::<Value>(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).to_string()));

    (status, content_type, json)
}
