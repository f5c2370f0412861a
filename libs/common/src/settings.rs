//! Layered configuration loading
//!
//! Services describe their settings as a `Deserialize` struct and load it
//! through [`SettingsLoader`], which stacks, from lowest to highest
//! precedence: built-in defaults, an optional TOML file, and environment
//! variables sharing a service prefix (e.g. `AUTH_JWT_SECRET`).

use config::{Config, Environment, File, FileFormat, Value};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ConfigResult;

pub use config::Map;

/// Builder for a service's layered configuration
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    prefix: String,
    file: Option<String>,
    defaults: Vec<(String, Value)>,
    env: Option<Map<String, String>>,
}

impl SettingsLoader {
    /// Create a loader reading environment variables named `{PREFIX}_{KEY}`
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            file: None,
            defaults: Vec::new(),
            env: None,
        }
    }

    /// Read an optional TOML file (extension may be omitted)
    pub fn file(mut self, name: impl Into<String>) -> Self {
        self.file = Some(name.into());
        self
    }

    /// Register a default used when no other source sets `key`
    pub fn default_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.defaults.push((key.into(), value.into()));
        self
    }

    /// Replace the process environment with an explicit variable map
    pub fn env_source(mut self, vars: Map<String, String>) -> Self {
        self.env = Some(vars);
        self
    }

    /// Build every layer and deserialize it into `T`
    pub fn load<T: DeserializeOwned>(self) -> ConfigResult<T> {
        let mut builder = Config::builder();

        for (key, value) in self.defaults {
            builder = builder.set_default(key, value)?;
        }

        if let Some(name) = &self.file {
            debug!("Reading optional configuration file: {}", name);
            builder = builder.add_source(
                File::with_name(name)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        let config = builder
            .add_source(
                // Values stay strings here; typed fields are converted on deserialize
                Environment::with_prefix(&self.prefix).source(self.env),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Sample {
        name: String,
        port: u16,
        enabled: bool,
    }

    fn loader() -> SettingsLoader {
        SettingsLoader::new("SAMPLE")
            .default_value("name", "default-name")
            .default_value("port", 8080)
            .default_value("enabled", false)
    }

    #[test]
    fn test_defaults_apply_when_env_is_empty() {
        let sample: Sample = loader().env_source(Map::new()).load().unwrap();
        assert_eq!(sample.name, "default-name");
        assert_eq!(sample.port, 8080);
        assert!(!sample.enabled);
    }

    #[test]
    fn test_env_overrides_defaults() {
        let mut vars = Map::new();
        vars.insert("SAMPLE_NAME".to_string(), "from-env".to_string());
        vars.insert("SAMPLE_PORT".to_string(), "9090".to_string());
        vars.insert("SAMPLE_ENABLED".to_string(), "true".to_string());

        let sample: Sample = loader().env_source(vars).load().unwrap();
        assert_eq!(sample.name, "from-env");
        assert_eq!(sample.port, 9090);
        assert!(sample.enabled);
    }

    #[test]
    fn test_numeric_looking_string_is_kept_verbatim() {
        let mut vars = Map::new();
        vars.insert("SAMPLE_NAME".to_string(), "007".to_string());

        let sample: Sample = loader().env_source(vars).load().unwrap();
        assert_eq!(sample.name, "007");
    }

    #[test]
    fn test_foreign_prefix_is_ignored() {
        let mut vars = Map::new();
        vars.insert("OTHER_NAME".to_string(), "ignored".to_string());

        let sample: Sample = loader().env_source(vars).load().unwrap();
        assert_eq!(sample.name, "default-name");
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let sample: Sample = loader()
            .file("does-not-exist")
            .env_source(Map::new())
            .load()
            .unwrap();
        assert_eq!(sample.port, 8080);
    }

    #[test]
    fn test_missing_required_key_fails() {
        let result: ConfigResult<Sample> = SettingsLoader::new("SAMPLE")
            .env_source(Map::new())
            .load();
        assert!(result.is_err());
    }
}
