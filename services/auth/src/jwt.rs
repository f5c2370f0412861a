//! JWT service for session token signing and verification
//!
//! Tokens are signed with HS256 using a single process-wide secret that is
//! handed to [`JwtService::new`] at startup. A token carries its own expiry,
//! so verification needs no server-side state.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::error::{SessionError, SessionResult};

/// Claims embedded in a session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionClaims {
    /// Opaque user identifier
    pub user_id: String,
    /// User email
    pub email: String,
    /// Expiry instant, mirrored from `exp` for readers that want a timestamp
    pub expires_at: DateTime<Utc>,
    /// Issued at time
    pub iat: i64,
    /// Expiration time
    pub exp: i64,
}

impl SessionClaims {
    /// Build claims issued at `issued_at` and valid until `expires_at`
    pub fn new(
        user_id: impl Into<String>,
        email: impl Into<String>,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            email: email.into(),
            expires_at,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        }
    }
}

/// JWT service
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtService {
    /// Initialize a new JWT service from the shared secret
    pub fn new(secret: &str) -> SessionResult<Self> {
        if secret.trim().is_empty() {
            return Err(SessionError::MissingSecret);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        Ok(JwtService {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        })
    }

    /// Sign the claims into a compact token
    pub fn sign(&self, claims: &SessionClaims) -> SessionResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(SessionError::Signing)
    }

    /// Verify a token and return its claims
    pub fn verify(&self, token: &str) -> SessionResult<SessionClaims> {
        let token_data = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map_err(SessionError::Verification)?;
        Ok(token_data.claims)
    }
}
