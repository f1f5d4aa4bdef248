use prometheus::{IntCounterVec, IntGauge, Opts, Registry};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::info;

// Declare the static OnceCell to hold the Metrics.
static METRICS_INSTANCE: OnceCell<Arc<Metrics>> = OnceCell::const_new();

/// Asynchronously initializes and gets a reference to the static `Metrics`.
pub async fn get_metrics() -> &'static Arc<Metrics> {
    METRICS_INSTANCE
        .get_or_init(|| async {
            info!("Initializing Metrics ...");
            Metrics::new()
        })
        .await
}

pub const OUTCOME_OK: &str = "ok";
pub const OUTCOME_ERROR: &str = "error";

#[derive(Clone)]
pub struct Metrics {
    pub registry: Registry,

    // Auth metrics
    pub auth_requests: IntCounterVec,
    pub token_rejections: IntCounterVec,

    // Sum metrics
    pub sum_requests: IntCounterVec,

    // Config/runtime
    pub up: IntGauge,
}

impl Metrics {
    fn new() -> Arc<Self> {
        let registry = Registry::new_custom(Some("sumgate".into()), None).unwrap();

        let metrics: Arc<Metrics> = Arc::new(Self {
            auth_requests: IntCounterVec::new(Opts::new("auth_requests_total", "Token issuance attempts by outcome"), &["outcome"]).unwrap(),
            token_rejections: IntCounterVec::new(Opts::new("token_rejections_total", "Rejected bearer tokens by reason"), &["reason"]).unwrap(),
            sum_requests: IntCounterVec::new(Opts::new("sum_requests_total", "Sum computations by outcome"), &["outcome"]).unwrap(),
            up: IntGauge::new("up", "1 if service is healthy").unwrap(),

            registry,
        });

        // Register all metrics in the registry
        let reg = &metrics.registry;
        reg.register(Box::new(metrics.auth_requests.clone())).unwrap();
        reg.register(Box::new(metrics.token_rejections.clone())).unwrap();
        reg.register(Box::new(metrics.sum_requests.clone())).unwrap();
        reg.register(Box::new(metrics.up.clone())).unwrap();

        metrics
    }
}
