//! CLI utilities for binaries
//!
//! Resolves which configuration file to load.

use quotes::infrastructure::config::{ConfigError, QuotesConfig};
use std::path::PathBuf;

/// Type of configuration to load
#[derive(Debug, Clone)]
pub enum ConfigType {
    /// Quote board configuration (quotes_config.yaml)
    Quotes,
    /// Explicit path, not overridable from the environment
    Custom(String),
}

impl ConfigType {
    /// Get the default path for this config type
    pub fn default_path(&self) -> &str {
        match self {
            ConfigType::Quotes => "config/quotes_config.yaml",
            ConfigType::Custom(path) => path,
        }
    }

    /// Environment variable that overrides the path, if any
    pub fn env_var_name(&self) -> Option<&str> {
        match self {
            ConfigType::Quotes => Some("QUOTES_CONFIG_PATH"),
            ConfigType::Custom(_) => None,
        }
    }
}

/// Load configuration path from environment or use default
///
/// # Examples
/// ```rust,ignore
/// use quote_flash::bin_common::{load_config_from_env, ConfigType};
///
/// let path = load_config_from_env(ConfigType::Quotes);
/// ```
pub fn load_config_from_env(config_type: ConfigType) -> PathBuf {
    config_type
        .env_var_name()
        .and_then(|name| std::env::var(name).ok())
        .unwrap_or_else(|| config_type.default_path().to_string())
        .into()
}

/// Resolve the path, then load it or fall back to defaults plus env
pub fn load_quotes_config(config_type: ConfigType) -> Result<QuotesConfig, ConfigError> {
    QuotesConfig::load_or_default(load_config_from_env(config_type))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_type_paths() {
        assert_eq!(ConfigType::Quotes.default_path(), "config/quotes_config.yaml");

        let custom = ConfigType::Custom("custom/path.yaml".to_string());
        assert_eq!(custom.default_path(), "custom/path.yaml");
    }

    #[test]
    fn test_config_type_env_vars() {
        assert_eq!(ConfigType::Quotes.env_var_name(), Some("QUOTES_CONFIG_PATH"));
        assert_eq!(ConfigType::Custom("x".to_string()).env_var_name(), None);
    }
}
