//! Custom error types for the authentication service

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, error};

/// Errors raised while issuing or reading a session
#[derive(Error, Debug)]
pub enum SessionError {
    /// Caller supplied an unusable user id or email
    #[error("Invalid session input: {0}")]
    InvalidInput(&'static str),

    /// No signing secret was configured
    #[error("Session signing secret is missing or empty")]
    MissingSecret,

    /// The signing primitive refused to produce a token
    #[error("Failed to sign session token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    /// Token is expired, tampered, malformed or signed with another secret
    #[error("Session token rejected: {0}")]
    Verification(#[source] jsonwebtoken::errors::Error),

    /// Issuance or expiry instant could not be represented
    #[error("Session timestamp out of range")]
    Clock,
}

/// Type alias for session results
pub type SessionResult<T> = Result<T, SessionError>;

/// HTTP-facing error type for the authentication service
#[derive(Error, Debug)]
pub enum AuthError {
    /// Missing or invalid session
    #[error("Unauthorized")]
    Unauthorized,

    /// Bad request with message
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error
    #[error("Internal server error")]
    InternalServerError,
}

impl From<SessionError> for AuthError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::InvalidInput(reason) => {
                debug!("Rejected session input: {}", reason);
                AuthError::BadRequest(reason.to_string())
            }
            SessionError::Verification(e) => {
                debug!("Rejected session token: {}", e);
                AuthError::Unauthorized
            }
            other => {
                error!("Session failure: {}", other);
                AuthError::InternalServerError
            }
        }
    }
}

impl From<JsonRejection> for AuthError {
    fn from(rejection: JsonRejection) -> Self {
        debug!("Rejected request body: {}", rejection.body_text());
        AuthError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AuthError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            AuthError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AuthError::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Type alias for handler results
pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_maps_to_bad_request() {
        let err = AuthError::from(SessionError::InvalidInput("email must not be empty"));
        assert!(matches!(err, AuthError::BadRequest(ref msg) if msg == "email must not be empty"));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_missing_secret_is_internal() {
        let err = AuthError::from(SessionError::MissingSecret);
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_verification_failure_is_unauthorized() {
        let jwt_err = jsonwebtoken::errors::Error::from(
            jsonwebtoken::errors::ErrorKind::ExpiredSignature,
        );
        let err = AuthError::from(SessionError::Verification(jwt_err));
        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
    }
}
