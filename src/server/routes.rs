use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};
use tracing::{error, warn};

use crate::auth::{AuthError, Credentials};
use crate::observability::metrics::{get_metrics, OUTCOME_ERROR, OUTCOME_OK};
use crate::server::error::ApiError;
use crate::server::server::AppState;
use crate::sum::{self, SumValue};

static BEARER_PREFIX: &str = "Bearer ";

#[derive(Debug, Serialize)]
pub struct AuthenticateResponse {
    pub access_token: String,
    pub token_type: String,
    pub expired_in: i64,
}

#[derive(Debug, Serialize)]
pub struct SumResponse {
    pub sum: String,
}

/// POST /auth — exchange credentials for a bearer token.
pub async fn auth_handler(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<AuthenticateResponse>, ApiError> {
    let metrics = get_metrics().await;

    let creds: Credentials = serde_json::from_str(&body).map_err(|e| {
        error!(error = %e, "could not decode request");
        ApiError::InvalidRequest
    })?;

    let token = state.issuer.issue(&creds).map_err(|e| {
        error!(error = %e, "could not generate token");
        metrics.auth_requests.with_label_values(&[OUTCOME_ERROR]).inc();
        ApiError::from(e)
    })?;

    metrics.auth_requests.with_label_values(&[OUTCOME_OK]).inc();

    Ok(Json(AuthenticateResponse {
        access_token: token.access_token,
        token_type: token.token_type,
        expired_in: token.expires_in,
    }))
}

/// POST /sum — verify the bearer token, then reduce the JSON body.
pub async fn sum_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Result<Json<SumResponse>, ApiError> {
    let metrics = get_metrics().await;

    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    let token = match extract_token_from_header(auth_header) {
        Some(t) => t,
        None => {
            warn!("missing token");
            metrics.token_rejections.with_label_values(&["missing"]).inc();
            return Err(ApiError::Unauthorized);
        }
    };

    let value: Value = serde_json::from_str(&body).map_err(|e| {
        error!(error = %e, "could not decode request");
        ApiError::InvalidRequest
    })?;

    if let Err(e) = state.verifier.verify(token) {
        warn!(error = %e, "could not verify token");
        metrics
            .token_rejections
            .with_label_values(&[rejection_reason(&e)])
            .inc();
        return Err(ApiError::from(e));
    }

    let total = sum::sum(&SumValue::from(value)).map_err(|e| {
        error!(error = %e, "could not sum");
        metrics.sum_requests.with_label_values(&[OUTCOME_ERROR]).inc();
        ApiError::from(e)
    })?;

    metrics.sum_requests.with_label_values(&[OUTCOME_OK]).inc();

    Ok(Json(SumResponse {
        sum: hex_digest(total),
    }))
}

fn extract_token_from_header(auth_header: &str) -> Option<&str> {
    auth_header.strip_prefix(BEARER_PREFIX)
}

fn rejection_reason(err: &AuthError) -> &'static str {
    match err {
        AuthError::TokenInvalid => "invalid",
        AuthError::TokenExpired => "expired",
        AuthError::IssuerInvalid => "issuer",
        AuthError::AudienceInvalid => "audience",
        _ => "other",
    }
}

/// Hex-encoded SHA-256 over the total rendered with six decimal places.
/// The rendering is part of the wire contract.
pub fn hex_digest(total: f64) -> String {
    let hash = Sha256::digest(format!("{total:.6}").as_bytes());
    hex::encode(hash)
}
