use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, Header};
use tracing::debug;

use crate::auth::error::AuthError;
use crate::auth::key::SigningKey;
use crate::auth::models::{Claims, Credentials, Token};
use crate::utils::constants::{
    CLAIM_AUDIENCE, CLAIM_DURATION_SECS, CLAIM_ISSUER, TOKEN_TYPE_BEARER,
};

/// Mints HS256-signed bearer tokens for validated credentials.
#[derive(Clone)]
pub struct TokenIssuer {
    key: SigningKey,
}

impl TokenIssuer {
    pub fn new(key: SigningKey) -> Self {
        Self { key }
    }

    /// Validate the credentials and produce a signed token.
    ///
    /// Credential checks run before any cryptographic work. The claim set
    /// carries fixed issuer and audience values, a one-hour expiry and a
    /// jti derived from the issuance second.
    pub fn issue(&self, creds: &Credentials) -> Result<Token, AuthError> {
        creds.validate()?;

        let now = Utc::now();
        let claims = Claims {
            sub: creds.username.clone(),
            exp: Some((now + Duration::seconds(CLAIM_DURATION_SECS)).timestamp()),
            iss: Some(CLAIM_ISSUER.to_string()),
            aud: Some(CLAIM_AUDIENCE.to_string()),
            jti: Some(now.timestamp().to_string()),
        };

        let signed = encode(&Header::new(Algorithm::HS256), &claims, &self.key.encoding())
            .map_err(|e| AuthError::SigningFailed(e.to_string()))?;

        debug!(sub = %claims.sub, "issued token");

        Ok(Token {
            access_token: signed,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: CLAIM_DURATION_SECS,
        })
    }
}
