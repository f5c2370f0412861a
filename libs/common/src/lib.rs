//! Common library for the Joy Kunga application
//!
//! This crate provides shared functionality used across different services
//! in the Joy Kunga application: layered configuration loading, error
//! types and static prompt content.

pub mod error;
pub mod prompts;
pub mod settings;

/// Example usage of the settings module
///
/// ```rust,no_run
/// use common::settings::SettingsLoader;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct ServiceSettings {
///     listen_addr: String,
/// }
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let settings: ServiceSettings = SettingsLoader::new("AUTH")
///         .default_value("listen_addr", "0.0.0.0:3000")
///         .load()?;
///     println!("Listening on {}", settings.listen_addr);
///     Ok(())
/// }
/// ```
pub fn example_usage() {}
