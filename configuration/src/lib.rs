use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

pub type AppConfig = SubtitleConfig;

/// Environment variable naming the optional TOML configuration file.
pub const ENV_CONFIG_PATH: &str = "SUBTITLE_SERVICE_CONFIG";

const ENV_HOST: &str = "SUBTITLE_SERVICE_HOST";
const ENV_PORT: &str = "SUBTITLE_SERVICE_PORT";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubtitleConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub service: ServiceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub audio: AudioConfig,
    #[serde(default)]
    pub recognizer: RecognizerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioConfig {
    #[serde(default = "default_sample_rate")]
    pub sample_rate_hz: u32,
    /// Bytes of PCM fed to the recognizer per call; a throughput knob,
    /// not a correctness constraint.
    #[serde(default = "default_chunk_bytes")]
    pub chunk_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizerConfig {
    #[serde(default = "default_model_path")]
    pub model_path: String,
}

impl Default for SubtitleConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            service: ServiceConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            audio: AudioConfig::default(),
            recognizer: RecognizerConfig::default(),
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: default_sample_rate(),
            chunk_bytes: default_chunk_bytes(),
        }
    }
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid configuration value: {field} = {value}")]
    InvalidValue { field: String, value: String },
}

/// Load configuration from the file named by `SUBTITLE_SERVICE_CONFIG`
/// (defaults apply when unset), then apply host/port env overrides.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let mut config = match std::env::var(ENV_CONFIG_PATH) {
        Ok(path) => from_file(Path::new(&path))?,
        Err(_) => AppConfig::default(),
    };

    if let Ok(host) = std::env::var(ENV_HOST) {
        config.server.host = host;
    }
    if let Ok(port) = std::env::var(ENV_PORT) {
        config.server.port = port.parse().map_err(|_| ConfigError::InvalidValue {
            field: "server.port".to_string(),
            value: port,
        })?;
    }

    Ok(config)
}

pub fn from_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|_| ConfigError::FileNotFound(path.display().to_string()))?;

    toml::from_str(&content).map_err(|err| ConfigError::Parse(err.to_string()))
}

/// Initialize tracing output. `RUST_LOG` wins over the configured level.
pub fn setup_logging(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_sample_rate() -> u32 {
    16_000
}

fn default_chunk_bytes() -> usize {
    4_000
}

fn default_model_path() -> String {
    "models/vosk-model-small-en-us-0.15".to_string()
}
