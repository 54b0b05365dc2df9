use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

pub const CONFIG_FILE_NAME: &str = "pledgetrack.json";

const ENV_DATABASE_PATH: &str = "PLEDGETRACK_DATABASE_PATH";
const ENV_LOG_DIR: &str = "PLEDGETRACK_LOG_DIR";
const ENV_LOG_LEVEL: &str = "PLEDGETRACK_LOG_LEVEL";

/// Log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(format!("Unknown log level: {}", other)),
        }
    }
}

/// Runtime settings for the store and the logger.
///
/// Resolution order: built-in defaults, then `pledgetrack.json` if present,
/// then `PLEDGETRACK_*` environment variables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub database_path: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: LogLevel,
    pub max_connections: u32,
    pub query_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let data_dir = default_data_dir();

        Self {
            database_path: data_dir.join("pledgetrack.db"),
            log_dir: data_dir.join("logs"),
            log_level: LogLevel::Info,
            max_connections: 5,
            query_timeout_secs: 10,
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("pledgetrack")
}

impl AppConfig {
    /// Load from `path` (or the default location) and apply env overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::default_path);

        let mut config = Self::from_file(&config_path)?;
        config.apply_overrides(|key| std::env::var(key).ok());

        info!(
            config_path = %config_path.display(),
            database_path = %config.database_path.display(),
            log_level = config.log_level.as_str(),
            "Config loaded"
        );

        Ok(config)
    }

    pub fn default_path() -> PathBuf {
        default_data_dir().join(CONFIG_FILE_NAME)
    }

    /// Missing file means defaults. A file that does not parse is ignored
    /// with a warning.
    fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!(
                    config_path = %path.display(),
                    error = %e,
                    "Config file is invalid, using defaults"
                );
                Ok(Self::default())
            }
        }
    }

    /// Apply `PLEDGETRACK_*` overrides read through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_DATABASE_PATH).filter(|v| !v.trim().is_empty()) {
            self.database_path = PathBuf::from(path);
        }

        if let Some(dir) = lookup(ENV_LOG_DIR).filter(|v| !v.trim().is_empty()) {
            self.log_dir = PathBuf::from(dir);
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            match level.parse::<LogLevel>() {
                Ok(parsed) => self.log_level = parsed,
                Err(e) => warn!("{}; keeping {}", e, self.log_level.as_str()),
            }
        }
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs.max(1))
    }
}
