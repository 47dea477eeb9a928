use crate::infrastructure::client::FEED_URL;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Env var overriding `feed.url`
pub const FEED_URL_ENV: &str = "QUOTES_FEED_URL";
/// Env var overriding `refresh_interval_ms`
pub const REFRESH_INTERVAL_ENV: &str = "QUOTES_REFRESH_INTERVAL_MS";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config file: {0}")]
    FileError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid value for {name}: {value}")]
    InvalidEnvVar { name: String, value: String },

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Quote board configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotesConfig {
    #[serde(default)]
    pub feed: FeedConfig,
    /// Delay between fetches, also the retry delay after a failure
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_ms: u64,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub palette: PaletteConfig,
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "default_feed_url")]
    pub url: String,
    /// Per-request timeout; falls back to the refresh interval
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: default_feed_url(),
            timeout_ms: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    #[serde(default = "default_attack_ms")]
    pub attack_ms: u64,
    #[serde(default = "default_decay_ms")]
    pub decay_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            attack_ms: default_attack_ms(),
            decay_ms: default_decay_ms(),
        }
    }
}

/// Highlight colors as RGB triples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteConfig {
    #[serde(default = "default_down_color")]
    pub down: [u8; 3],
    #[serde(default = "default_neutral_color")]
    pub neutral: [u8; 3],
    #[serde(default = "default_up_color")]
    pub up: [u8; 3],
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            down: default_down_color(),
            neutral: default_neutral_color(),
            up: default_up_color(),
        }
    }
}

impl Default for QuotesConfig {
    fn default() -> Self {
        Self {
            feed: FeedConfig::default(),
            refresh_interval_ms: default_refresh_interval(),
            animation: AnimationConfig::default(),
            palette: PaletteConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl QuotesConfig {
    /// Load configuration from YAML file, then apply env overrides
    pub fn load(config_path: impl AsRef<Path>) -> Result<Self> {
        dotenv::dotenv().ok(); // Don't fail if .env doesn't exist

        let yaml_content = std::fs::read_to_string(config_path)?;
        let mut config: QuotesConfig = serde_yaml::from_str(&yaml_content)?;

        config.apply_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Defaults plus env overrides, for runs without a config file
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let mut config = QuotesConfig::default();
        config.apply_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load the file when it exists, otherwise fall back to `from_env`
    pub fn load_or_default(config_path: impl AsRef<Path>) -> Result<Self> {
        let path = config_path.as_ref();
        if path.is_file() {
            Self::load(path)
        } else {
            info!("Config file {} not found, using defaults", path.display());
            Self::from_env()
        }
    }

    /// Override values from a variable lookup (normally the process env)
    pub fn apply_overrides<L>(&mut self, lookup: L) -> Result<()>
    where
        L: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(FEED_URL_ENV) {
            info!("Overriding feed URL from environment variable");
            self.feed.url = url;
        }

        if let Some(raw) = lookup(REFRESH_INTERVAL_ENV) {
            self.refresh_interval_ms =
                raw.trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidEnvVar {
                        name: REFRESH_INTERVAL_ENV.to_string(),
                        value: raw.clone(),
                    })?;
            info!("Overriding refresh interval from environment variable");
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let url = self.feed.url.trim();
        if url.is_empty() {
            return Err(ConfigError::ValidationError(
                "feed.url must not be empty".to_string(),
            ));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::ValidationError(format!(
                "feed.url must be an http(s) URL, got {}",
                url
            )));
        }

        if self.refresh_interval_ms == 0 {
            return Err(ConfigError::ValidationError(
                "refresh_interval_ms must be greater than 0".to_string(),
            ));
        }

        if let Some(timeout) = self.feed.timeout_ms {
            if timeout == 0 || timeout > self.refresh_interval_ms {
                return Err(ConfigError::ValidationError(
                    "feed.timeout_ms must be between 1 and refresh_interval_ms".to_string(),
                ));
            }
        }

        if self.animation.attack_ms == 0 || self.animation.decay_ms == 0 {
            return Err(ConfigError::ValidationError(
                "animation durations must be greater than 0".to_string(),
            ));
        }

        let valid_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_levels.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "log_level must be one of: {}",
                valid_levels.join(", ")
            )));
        }

        Ok(())
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }

    /// Effective fetch timeout
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.feed.timeout_ms.unwrap_or(self.refresh_interval_ms))
    }

    pub fn attack(&self) -> Duration {
        Duration::from_millis(self.animation.attack_ms)
    }

    pub fn decay(&self) -> Duration {
        Duration::from_millis(self.animation.decay_ms)
    }

    /// Log configuration summary
    pub fn log(&self) {
        info!("Configuration loaded:");
        info!("  Feed URL: {}", self.feed.url);
        info!("  Refresh interval: {} ms", self.refresh_interval_ms);
        info!("  Fetch timeout: {:?}", self.fetch_timeout());
        info!(
            "  Highlight: {} ms attack, {} ms decay",
            self.animation.attack_ms, self.animation.decay_ms
        );
        info!("  Log level: {}", self.log_level);
    }
}

fn default_feed_url() -> String {
    FEED_URL.to_string()
}

fn default_refresh_interval() -> u64 {
    5000
}

fn default_attack_ms() -> u64 {
    500
}

fn default_decay_ms() -> u64 {
    2000
}

fn default_down_color() -> [u8; 3] {
    [255, 0, 0]
}

fn default_neutral_color() -> [u8; 3] {
    [0, 0, 0]
}

fn default_up_color() -> [u8; 3] {
    [0, 128, 0]
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = QuotesConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.refresh_interval(), Duration::from_millis(5000));
        assert_eq!(config.attack(), Duration::from_millis(500));
        assert_eq!(config.decay(), Duration::from_millis(2000));
        assert_eq!(config.fetch_timeout(), config.refresh_interval());
        assert_eq!(config.feed.url, FEED_URL);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = "refresh_interval_ms: 1000\nfeed:\n  url: http://localhost:8080/tickers\n";
        let config: QuotesConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.refresh_interval_ms, 1000);
        assert_eq!(config.feed.url, "http://localhost:8080/tickers");
        assert_eq!(config.animation.decay_ms, 2000);
        assert_eq!(config.palette, PaletteConfig::default());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = QuotesConfig::default();
        config
            .apply_overrides(lookup(&[
                (FEED_URL_ENV, "http://127.0.0.1:3000/api"),
                (REFRESH_INTERVAL_ENV, "750"),
            ]))
            .unwrap();
        assert_eq!(config.feed.url, "http://127.0.0.1:3000/api");
        assert_eq!(config.refresh_interval_ms, 750);
    }

    #[test]
    fn test_invalid_interval_override() {
        let mut config = QuotesConfig::default();
        let result = config.apply_overrides(lookup(&[(REFRESH_INTERVAL_ENV, "soon")]));
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar { .. })));
    }

    #[test]
    fn test_validation_errors() {
        let mut config = QuotesConfig::default();
        config.refresh_interval_ms = 0;
        assert!(config.validate().is_err());

        let mut config = QuotesConfig::default();
        config.feed.url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        let mut config = QuotesConfig::default();
        config.feed.timeout_ms = Some(10_000);
        assert!(config.validate().is_err());

        let mut config = QuotesConfig::default();
        config.animation.attack_ms = 0;
        assert!(config.validate().is_err());

        let mut config = QuotesConfig::default();
        config.log_level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "feed:\n  url: https://example.com/tickers\n  timeout_ms: 1500\nrefresh_interval_ms: 2000\nlog_level: debug"
        )
        .unwrap();

        let config = QuotesConfig::load(file.path()).unwrap();
        assert_eq!(config.feed.url, "https://example.com/tickers");
        assert_eq!(config.fetch_timeout(), Duration::from_millis(1500));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_load_missing_file() {
        let result = QuotesConfig::load("does/not/exist.yaml");
        assert!(matches!(result, Err(ConfigError::FileError(_))));
    }
}
