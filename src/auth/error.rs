use thiserror::Error;

/// Enumerate possible token lifecycle errors.
///
/// Verification errors are all terminal for the call that produced them;
/// the transport layer collapses them into a single unauthorized response
/// but they stay distinguishable here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("the username is invalid")]
    UsernameInvalid,

    #[error("the password is invalid")]
    PasswordInvalid,

    #[error("the token is invalid")]
    TokenInvalid,

    #[error("the token is expired")]
    TokenExpired,

    #[error("the token issuer is invalid")]
    IssuerInvalid,

    #[error("the token audience is invalid")]
    AudienceInvalid,

    /// Fatal misconfiguration, e.g. an unusable signing key. Reported,
    /// never degraded.
    #[error("could not sign token: {0}")]
    SigningFailed(String),
}
