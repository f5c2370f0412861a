//! Stateless session issuance
//!
//! A session is nothing more than a signed token held by the client in the
//! `auth-token` cookie. Issuing one signs the claims and writes the cookie;
//! reading one verifies the cookie value; deleting one clears the cookie.

use axum_extra::extract::cookie::{Cookie, CookieJar};
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};

use crate::{
    cookie::{CookieOptions, CookieSink, SESSION_COOKIE},
    error::{SessionError, SessionResult},
    jwt::{JwtService, SessionClaims},
};

/// Lifetime of both the token and the cookie carrying it
pub const SESSION_TTL_DAYS: i64 = 7;

/// Session manager issuing and reading cookie-borne sessions
#[derive(Clone)]
pub struct SessionManager {
    jwt_service: JwtService,
    cookie_secure: bool,
}

impl SessionManager {
    /// Create a new session manager
    pub fn new(jwt_service: JwtService, cookie_secure: bool) -> Self {
        Self {
            jwt_service,
            cookie_secure,
        }
    }

    /// Sign a session for the user and write it to `sink` as the session cookie
    pub fn create_session<S>(
        &self,
        sink: &mut S,
        user_id: &str,
        email: &str,
    ) -> SessionResult<SessionClaims>
    where
        S: CookieSink + ?Sized,
    {
        self.create_session_at(sink, user_id, email, Utc::now())
    }

    pub(crate) fn create_session_at<S>(
        &self,
        sink: &mut S,
        user_id: &str,
        email: &str,
        now: DateTime<Utc>,
    ) -> SessionResult<SessionClaims>
    where
        S: CookieSink + ?Sized,
    {
        if user_id.trim().is_empty() {
            return Err(SessionError::InvalidInput("userId must not be empty"));
        }
        if email.trim().is_empty() {
            return Err(SessionError::InvalidInput("email must not be empty"));
        }

        // Whole seconds, so `exp` and the cookie expiry are the same instant
        let issued_at = DateTime::from_timestamp(now.timestamp(), 0).ok_or(SessionError::Clock)?;
        let expires_at = issued_at
            .checked_add_signed(Duration::days(SESSION_TTL_DAYS))
            .ok_or(SessionError::Clock)?;

        let claims = SessionClaims::new(user_id, email, issued_at, expires_at);
        let token = self.jwt_service.sign(&claims)?;

        sink.set(
            SESSION_COOKIE,
            &token,
            &CookieOptions::session(expires_at, self.cookie_secure),
        )?;

        info!("Created session for user: {}", user_id);
        Ok(claims)
    }

    /// Read and verify the session cookie; any failure means unauthenticated
    pub fn get_session(&self, jar: &CookieJar) -> Option<SessionClaims> {
        let cookie = jar.get(SESSION_COOKIE)?;

        match self.jwt_service.verify(cookie.value()) {
            Ok(claims) => Some(claims),
            Err(e) => {
                debug!("Ignoring invalid session cookie: {}", e);
                None
            }
        }
    }

    /// Clear the session cookie
    pub fn delete_session(&self, jar: CookieJar) -> CookieJar {
        info!("Deleting session cookie");
        jar.remove(Cookie::build(SESSION_COOKIE).path("/"))
    }
}
