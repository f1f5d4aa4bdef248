use jsonwebtoken::{DecodingKey, EncodingKey};

/// Shared symmetric signing secret, read-only after process start.
///
/// Passed explicitly to issuer and verifier instead of living in ambient
/// global state. Both sides must be built from the same bytes.
#[derive(Clone)]
pub struct SigningKey {
    secret: Vec<u8>,
}

impl SigningKey {
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self { secret: secret.into() }
    }

    pub fn encoding(&self) -> EncodingKey {
        EncodingKey::from_secret(&self.secret)
    }

    pub fn decoding(&self) -> DecodingKey {
        DecodingKey::from_secret(&self.secret)
    }
}

impl std::fmt::Debug for SigningKey {
    // Never print the secret bytes
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey").finish_non_exhaustive()
    }
}
