// tests/common/mod.rs
pub use axum::Router;
pub use serde_json::json;
pub use tokio::task::JoinHandle;

use std::net::SocketAddr;

use reqwest::Client;

use crate::auth::SigningKey;
use crate::config::settings::MetricsConfig;
use crate::observability::metrics::get_metrics;
use crate::server::server::{router, AppState};

pub const TEST_KEY: &str = "test-secret";

/// Build the full application router around a fixed test key.
pub async fn build_app(metrics_enabled: bool) -> Router {
    let metrics = get_metrics().await;
    let state = AppState::new(SigningKey::new(TEST_KEY.as_bytes()), metrics);
    let metrics_config = MetricsConfig {
        path: "/metrics".to_string(),
        is_enabled: metrics_enabled,
    };
    router(state, &metrics_config)
}

/// Spawn an Axum router on an ephemeral port and return (JoinHandle, SocketAddr)
pub async fn spawn_axum(router: Router) -> (JoinHandle<()>, SocketAddr) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server failed");
    });
    (handle, addr)
}

pub fn build_reqwest_client() -> Client {
    Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .expect("reqwest client")
}
