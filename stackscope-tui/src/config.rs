//! Configuration loading for the stackscope TUI.
//!
//! Every field has a sensible default; a config file is only needed to
//! override them. The API key may come from the file or from the
//! `GEMINI_API_KEY` environment variable. Its absence is not a load error -
//! generation reports the missing credential at call time instead.

use serde::Deserialize;
use stackscope_gen::{GenSettings, DEFAULT_BASE_URL, DEFAULT_MODEL};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct TuiConfig {
    pub endpoint: EndpointConfig,
    pub retry: RetryConfig,
    pub refresh_interval_ms: u64,
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct EndpointConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    pub request_timeout_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub initial_backoff_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            endpoint: EndpointConfig::default(),
            retry: RetryConfig::default(),
            refresh_interval_ms: 200,
            theme: ThemeConfig::default(),
        }
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            request_timeout_ms: 30_000,
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_backoff_ms: 1000,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "midnight".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl TuiConfig {
    /// Load from `--config <path>` or `STACKSCOPE_CONFIG`, falling back to
    /// defaults when neither is set. The environment API key fills in only
    /// when the file didn't provide one.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path_from_args().or_else(config_path_from_env);
        let mut config = match path {
            Some(path) => Self::from_path(&path)?,
            None => Self::default(),
        };
        if config.endpoint.api_key.is_none() {
            config.endpoint.api_key = std::env::var("GEMINI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty());
        }
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: TuiConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "endpoint.base_url",
                reason: "must not be empty".to_string(),
            });
        }
        if self.endpoint.model.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "endpoint.model",
                reason: "must not be empty".to_string(),
            });
        }
        if self.endpoint.request_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "endpoint.request_timeout_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.retry.max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "retry.max_attempts",
                reason: "must be >= 1".to_string(),
            });
        }
        if self.retry.initial_backoff_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "retry.initial_backoff_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.refresh_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "refresh_interval_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.theme.name.to_ascii_lowercase() != "midnight" {
            return Err(ConfigError::InvalidValue {
                field: "theme.name",
                reason: "only 'midnight' is supported".to_string(),
            });
        }
        Ok(())
    }

    /// Settings for the generation client.
    pub fn gen_settings(&self) -> GenSettings {
        GenSettings {
            base_url: self.endpoint.base_url.clone(),
            model: self.endpoint.model.clone(),
            api_key: self.endpoint.api_key.clone(),
            request_timeout: Duration::from_millis(self.endpoint.request_timeout_ms),
            max_attempts: self.retry.max_attempts,
            initial_backoff: Duration::from_millis(self.retry.initial_backoff_ms),
        }
    }
}

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var("STACKSCOPE_CONFIG").ok().map(PathBuf::from)
}

fn config_path_from_args() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
    }
    None
}
