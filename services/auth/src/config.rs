//! Authentication service configuration

use std::fmt;

use common::{
    error::{ConfigError, ConfigResult},
    settings::{Map, SettingsLoader},
};
use serde::Deserialize;

/// Environment prefix for every setting of this service
const ENV_PREFIX: &str = "AUTH";

/// Optional configuration file, looked up relative to the working directory
const CONFIG_FILE: &str = "auth.toml";

/// Authentication service settings
///
/// # Environment Variables
/// - `AUTH_JWT_SECRET`: Symmetric secret for signing session tokens (required)
/// - `AUTH_LISTEN_ADDR`: Socket address to bind (default: "0.0.0.0:3000")
/// - `AUTH_COOKIE_SECURE`: Mark the session cookie `Secure` (default: false)
#[derive(Clone, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub jwt_secret: String,
    pub listen_addr: String,
    pub cookie_secure: bool,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("listen_addr", &self.listen_addr)
            .field("cookie_secure", &self.cookie_secure)
            .finish()
    }
}

impl AuthConfig {
    /// Load settings from defaults, `auth.toml` and the process environment
    pub fn from_env() -> ConfigResult<Self> {
        Self::load(Self::loader())
    }

    /// Load settings from defaults and an explicit variable map
    pub fn from_vars(vars: Map<String, String>) -> ConfigResult<Self> {
        Self::load(Self::loader().env_source(vars))
    }

    fn loader() -> SettingsLoader {
        SettingsLoader::new(ENV_PREFIX)
            .file(CONFIG_FILE)
            .default_value("listen_addr", "0.0.0.0:3000")
            .default_value("cookie_secure", false)
    }

    fn load(loader: SettingsLoader) -> ConfigResult<Self> {
        let config: AuthConfig = loader.load()?;

        if config.jwt_secret.trim().is_empty() {
            return Err(ConfigError::Missing(format!("{}_JWT_SECRET", ENV_PREFIX)));
        }

        if config.listen_addr.parse::<std::net::SocketAddr>().is_err() {
            return Err(ConfigError::Invalid {
                key: "listen_addr".to_string(),
                reason: format!("'{}' is not a socket address", config.listen_addr),
            });
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Map<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_with_secret() {
        let config = AuthConfig::from_vars(vars(&[("AUTH_JWT_SECRET", "s3cret")])).unwrap();

        assert_eq!(config.jwt_secret, "s3cret");
        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert!(!config.cookie_secure);
    }

    #[test]
    fn test_env_overrides() {
        let config = AuthConfig::from_vars(vars(&[
            ("AUTH_JWT_SECRET", "s3cret"),
            ("AUTH_LISTEN_ADDR", "127.0.0.1:8080"),
            ("AUTH_COOKIE_SECURE", "true"),
        ]))
        .unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert!(config.cookie_secure);
    }

    #[test]
    fn test_secret_is_loaded_verbatim() {
        for secret in ["00123456", "1e5", "TRUE", "99999999999999999999"] {
            let config = AuthConfig::from_vars(vars(&[("AUTH_JWT_SECRET", secret)])).unwrap();
            assert_eq!(config.jwt_secret, secret);
        }
    }

    #[test]
    fn test_missing_secret_fails() {
        let result = AuthConfig::from_vars(vars(&[]));
        assert!(matches!(result, Err(ConfigError::Missing(ref key)) if key == "AUTH_JWT_SECRET"));
    }

    #[test]
    fn test_blank_secret_fails() {
        let result = AuthConfig::from_vars(vars(&[("AUTH_JWT_SECRET", "  ")]));
        assert!(matches!(result, Err(ConfigError::Missing(_))));
    }

    #[test]
    fn test_invalid_listen_addr_fails() {
        let result = AuthConfig::from_vars(vars(&[
            ("AUTH_JWT_SECRET", "s3cret"),
            ("AUTH_LISTEN_ADDR", "not-an-address"),
        ]));
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = AuthConfig::from_vars(vars(&[("AUTH_JWT_SECRET", "s3cret")])).unwrap();
        let rendered = format!("{:?}", config);

        assert!(!rendered.contains("s3cret"));
        assert!(rendered.contains("<redacted>"));
    }
}
