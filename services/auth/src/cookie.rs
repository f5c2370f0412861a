//! Response cookie sink
//!
//! The session issuer writes its cookie through [`CookieSink`] so it does not
//! depend on a particular web framework. Handlers use the axum-extra
//! [`CookieJar`] implementation.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::{DateTime, Utc};
use time::OffsetDateTime;

use crate::error::{SessionError, SessionResult};

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE: &str = "auth-token";

/// Attributes attached to a written cookie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieOptions {
    pub http_only: bool,
    pub same_site: SameSite,
    pub path: &'static str,
    pub secure: bool,
    pub expires: DateTime<Utc>,
}

impl CookieOptions {
    /// Fixed attributes for the session cookie
    pub fn session(expires: DateTime<Utc>, secure: bool) -> Self {
        Self {
            http_only: true,
            same_site: SameSite::Lax,
            path: "/",
            secure,
            expires,
        }
    }
}

/// Destination for cookies set on the outgoing response
pub trait CookieSink {
    /// Set `name` to `value` with the given attributes
    fn set(&mut self, name: &str, value: &str, options: &CookieOptions) -> SessionResult<()>;
}

impl CookieSink for CookieJar {
    fn set(&mut self, name: &str, value: &str, options: &CookieOptions) -> SessionResult<()> {
        let expires = OffsetDateTime::from_unix_timestamp(options.expires.timestamp())
            .map_err(|_| SessionError::Clock)?;

        let cookie = Cookie::build((name.to_owned(), value.to_owned()))
            .http_only(options.http_only)
            .same_site(options.same_site)
            .path(options.path)
            .secure(options.secure)
            .expires(expires)
            .build();

        let jar = std::mem::replace(self, CookieJar::new());
        *self = jar.add(cookie);
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Sink that records every call instead of touching a response
    #[derive(Debug, Default)]
    pub(crate) struct RecordingSink {
        pub(crate) calls: Vec<(String, String, CookieOptions)>,
    }

    impl CookieSink for RecordingSink {
        fn set(&mut self, name: &str, value: &str, options: &CookieOptions) -> SessionResult<()> {
            self.calls
                .push((name.to_string(), value.to_string(), options.clone()));
            Ok(())
        }
    }
}
