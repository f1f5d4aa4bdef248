use clap::Parser;
use serde::Deserialize;

use crate::utils::constants::{DEFAULT_HOST, DEFAULT_METRICS_PATH, DEFAULT_PORT};
use crate::utils::logging::LogLevel;

/// ================================
/// Global service-wide settings
/// ================================
#[derive(Debug, Parser, Clone)]
#[command(author, version, about, long_about = None)]
pub struct ServiceConfig {
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    #[arg(short, long, env = "PORT", default_value = DEFAULT_PORT)]
    pub port: String,

    /// Shared symmetric signing key. Issuer and verifier must be built
    /// from the same value to interoperate.
    #[arg(long, env = "JWT", default_value = "secret", hide_env_values = true)]
    pub jwt_key: String,

    #[arg(long, env = "LOG_LEVEL", value_enum)]
    pub log_level: Option<LogLevel>,

    #[arg(long, env = "METRICS_ENABLED", default_value_t = false)]
    pub metrics_enabled: bool,

    #[arg(long, env = "METRICS_PATH", default_value = DEFAULT_METRICS_PATH)]
    pub metrics_path: String,
}

impl ServiceConfig {
    pub fn metrics(&self) -> MetricsConfig {
        MetricsConfig {
            path: self.metrics_path.clone(),
            is_enabled: self.metrics_enabled,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct MetricsConfig {
    pub path: String,
    pub is_enabled: bool,
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String, // allowed: trace, debug, info, warn, error
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new(level: String, format: LogFormat) -> Self {
        Self { level, format }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Compact,
}

impl LogFormat {
    pub fn from_env() -> Self {
        match std::env::var("LOG_FORMAT")
            .unwrap_or_else(|_| "compact".to_string())
            .to_lowercase()
            .as_str()
        {
            "json" => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}
