use std::sync::Arc;

use anyhow::Result;
use axum::routing::post;
use axum::Router;
use tracing::info;

use crate::auth::{SigningKey, TokenIssuer, TokenVerifier};
use crate::config::settings::{MetricsConfig, ServiceConfig};
use crate::observability::metrics::{get_metrics, Metrics};
use crate::observability::routes::MetricsState;
use crate::server::routes::{auth_handler, sum_handler};

#[derive(Clone)]
pub struct AppState {
    pub issuer: Arc<TokenIssuer>,
    pub verifier: Arc<TokenVerifier>,
    pub metrics_state: MetricsState,
}

impl AppState {
    pub fn new(key: SigningKey, metrics: &Metrics) -> Self {
        Self {
            issuer: Arc::new(TokenIssuer::new(key.clone())),
            verifier: Arc::new(TokenVerifier::new(key)),
            metrics_state: MetricsState::new(metrics.registry.clone()),
        }
    }
}

/// Assemble the full application router.
pub fn router(state: AppState, metrics_config: &MetricsConfig) -> Router {
    Router::new()
        .route("/auth", post(auth_handler))
        .route("/sum", post(sum_handler))
        .merge(state.metrics_state.router(metrics_config))
        .with_state(state)
}

/// Start the Axum server and run until SIGINT.
pub async fn start(config: &ServiceConfig) -> Result<()> {
    let metrics = get_metrics().await;

    let key = SigningKey::new(config.jwt_key.as_bytes());
    let state = AppState::new(key, metrics);
    let app = router(state, &config.metrics());

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;
    info!(host = %config.host, port = %config.port, "starting REST app");

    metrics.up.set(1);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("stopping REST app");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
