use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::auth::AuthError;
use crate::sum::SumError;

/// Enumerate possible transport errors.
///
/// Every verification-chain failure collapses to `Unauthorized` here;
/// the distinct kinds stay visible in logs and metrics only.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("the request is invalid")]
    InvalidRequest,

    #[error("the username is invalid")]
    InvalidUsername,

    #[error("the password is invalid")]
    InvalidPassword,

    #[error("unauthorized")]
    Unauthorized,

    #[error("the value type is unsupported")]
    UnsupportedValueType,

    #[error("internal server error")]
    Internal,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    status_code: u16,
    error: String,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest | Self::InvalidUsername | Self::InvalidPassword => {
                StatusCode::BAD_REQUEST
            }
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::UnsupportedValueType => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            status_code: status.as_u16(),
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

// Translate domain errors into transport errors.

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::UsernameInvalid => ApiError::InvalidUsername,
            AuthError::PasswordInvalid => ApiError::InvalidPassword,
            AuthError::TokenInvalid
            | AuthError::TokenExpired
            | AuthError::IssuerInvalid
            | AuthError::AudienceInvalid => ApiError::Unauthorized,
            AuthError::SigningFailed(_) => ApiError::Internal,
        }
    }
}

impl From<SumError> for ApiError {
    fn from(err: SumError) -> Self {
        match err {
            SumError::UnsupportedValueType(_) => ApiError::UnsupportedValueType,
        }
    }
}
