use serde::{Deserialize, Serialize};

use crate::auth::error::AuthError;

/// One authentication attempt. Not persisted.
///
/// Fields default to empty when absent from the request body so shape
/// problems surface as credential validation errors, not decode errors.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl Credentials {
    /// Invariant: both fields non-empty. Username is checked before
    /// password, so an empty pair reports `UsernameInvalid`.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.username.is_empty() {
            return Err(AuthError::UsernameInvalid);
        }

        if self.password.is_empty() {
            return Err(AuthError::PasswordInvalid);
        }
        Ok(())
    }
}

/// Claim set embedded in every signed token. Built once per issuance,
/// never mutated afterwards.
///
/// All semantic claims are optional on the wire so the verifier can
/// report a missing claim with the right error kind instead of failing
/// at deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,

    /// Per-issuance id, derived from the issuance second. Uniqueness is
    /// best-effort at one-second resolution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

/// Issued bearer token. The access token string is the sole source of
/// truth for later verification; no server-side session state exists.
#[derive(Debug, Clone, Serialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}
