//! Shared constants and invariants

/// Claim values baked into every issued token.
pub const CLAIM_ISSUER: &str = "foo-issuer";
pub const CLAIM_AUDIENCE: &str = "foo-audience";

/// Token lifetime. The `expires_in` field of an issued token is this
/// value in seconds.
pub const CLAIM_DURATION_SECS: i64 = 3600;

pub const TOKEN_TYPE_BEARER: &str = "Bearer";

// Server defaults
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: &str = "8080";
pub const DEFAULT_METRICS_PATH: &str = "/metrics";
