//! Server configuration management.
//!
//! Handles loading configuration from defaults, a TOML file, environment
//! variables, and CLI arguments, in increasing order of precedence.

use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid port number: {0}. Must be between 1 and 65535")]
    InvalidPort(u16),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid curve sample count: {0}. Must be at least 1")]
    InvalidCurveSamples(usize),

    #[error("Invalid bind address: {0}")]
    InvalidAddress(String),

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to a tracing filter string.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Server configuration structure.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Log level.
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Number of intervals in a price-curve sweep; responses carry
    /// `curve_samples + 1` evenly spaced points.
    pub curve_samples: usize,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8020,
            log_level: LogLevel::Info,
            curve_samples: 100,
        }
    }
}

impl ServerConfig {
    /// Create a new ServerConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration overrides from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("PRICER_SERVER_HOST") {
            config.host = host;
        }

        if let Ok(port_str) = std::env::var("PRICER_SERVER_PORT") {
            config.port = port_str.parse().map_err(|_| ConfigError::InvalidPort(0))?;
        }

        if let Ok(log_level) = std::env::var("PRICER_LOG_LEVEL") {
            config.log_level = LogLevel::from_str(&log_level)?;
        }

        if let Ok(samples_str) = std::env::var("PRICER_CURVE_SAMPLES") {
            config.curve_samples = samples_str
                .parse()
                .map_err(|_| ConfigError::InvalidCurveSamples(0))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: ServerConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidPort(self.port));
        }
        if self.curve_samples == 0 {
            return Err(ConfigError::InvalidCurveSamples(self.curve_samples));
        }
        Ok(())
    }

    /// Get the socket address string.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Merge with CLI arguments (CLI takes precedence).
    pub fn merge_with_cli(&mut self, cli: &CliArgs) {
        if let Some(host) = &cli.host {
            self.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.port = port;
        }
        if let Some(log_level) = &cli.log_level {
            if let Ok(level) = LogLevel::from_str(log_level) {
                self.log_level = level;
            }
        }
        if let Some(samples) = cli.curve_samples {
            self.curve_samples = samples;
        }
    }
}

/// CLI arguments structure.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path.
    pub config_file: Option<PathBuf>,
    /// Host address override.
    pub host: Option<String>,
    /// Port override.
    pub port: Option<u16>,
    /// Log level override.
    pub log_level: Option<String>,
    /// Curve sample count override.
    pub curve_samples: Option<usize>,
}

/// Build configuration from all sources.
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<ServerConfig, ConfigError> {
    let mut config = if let Some(config_path) = &cli.config_file {
        ServerConfig::from_file(config_path)?
    } else {
        ServerConfig::default()
    };

    if let Ok(env_config) = ServerConfig::from_env() {
        if std::env::var("PRICER_SERVER_HOST").is_ok() {
            config.host = env_config.host;
        }
        if std::env::var("PRICER_SERVER_PORT").is_ok() {
            config.port = env_config.port;
        }
        if std::env::var("PRICER_LOG_LEVEL").is_ok() {
            config.log_level = env_config.log_level;
        }
        if std::env::var("PRICER_CURVE_SAMPLES").is_ok() {
            config.curve_samples = env_config.curve_samples;
        }
    }

    config.merge_with_cli(cli);
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8020);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.curve_samples, 100);
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_zero_port_rejected() {
        let mut config = ServerConfig::default();
        config.port = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidPort(0))
        ));
    }

    #[test]
    fn test_zero_curve_samples_rejected() {
        let mut config = ServerConfig::default();
        config.curve_samples = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidCurveSamples(0))
        ));
    }

    #[test]
    fn test_cli_overrides_defaults() {
        let cli = CliArgs {
            host: Some("127.0.0.1".to_string()),
            port: Some(9000),
            log_level: Some("debug".to_string()),
            curve_samples: Some(50),
            ..Default::default()
        };

        let mut config = ServerConfig::default();
        config.merge_with_cli(&cli);

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.curve_samples, 50);
    }

    #[test]
    fn test_socket_addr_format() {
        let mut config = ServerConfig::default();
        config.host = "127.0.0.1".to_string();
        config.port = 3000;
        assert_eq!(config.socket_addr(), "127.0.0.1:3000");
    }

    #[test]
    fn test_config_file_round_trip() {
        let toml_str = r#"
            host = "127.0.0.1"
            port = 9020
            log_level = "warn"
            curve_samples = 40
        "#;

        let config: ServerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9020);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.curve_samples, 40);
    }
}
