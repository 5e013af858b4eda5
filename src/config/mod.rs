use crate::error::{PortfolioError, Result};
use dashmap::DashMap;
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::Arc;

/// Key/value configuration, seeded from the process environment.
#[derive(Clone, Default)]
pub struct ConfigService {
    config: Arc<DashMap<String, String>>,
}

impl ConfigService {
    /// Empty configuration; every lookup falls back to its default.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        Self::from_vars_os(env::vars_os())
    }

    /// Entries whose key or value is not valid UTF-8 are skipped.
    pub fn from_vars_os<I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        let service = Self::default();
        for (key, value) in vars {
            match (key.into_string(), value.into_string()) {
                (Ok(key), Ok(value)) => service.set(&key, &value),
                (Ok(key), Err(_)) => {
                    tracing::warn!(key = %key, "Skipping environment variable with non-UTF-8 value");
                }
                (Err(key), _) => {
                    tracing::warn!(key = ?key, "Skipping environment variable with non-UTF-8 name");
                }
            }
        }
        service
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.config.get(key).map(|v| v.clone())
    }

    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    pub fn set(&self, key: &str, value: &str) {
        self.config.insert(key.to_string(), value.to_string());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Settings the binary needs to start serving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub seed_file: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl ServerConfig {
    pub const HOST: &'static str = "HOST";
    pub const PORT: &'static str = "PORT";
    pub const SEED_FILE: &'static str = "PORTFOLIO_SEED_FILE";
    pub const LOG_FORMAT: &'static str = "LOG_FORMAT";

    pub fn from_config(config: &ConfigService) -> Result<Self> {
        let port_raw = config.get_or(Self::PORT, "3000");
        let port = port_raw
            .trim()
            .parse::<u16>()
            .map_err(|e| PortfolioError::config(Self::PORT, format!("'{}': {}", port_raw, e)))?;

        let log_format = match config.get(Self::LOG_FORMAT).as_deref().map(str::trim) {
            None | Some("") | Some("compact") => LogFormat::Compact,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(PortfolioError::config(
                    Self::LOG_FORMAT,
                    format!("expected 'compact' or 'json', got '{}'", other),
                ));
            }
        };

        Ok(Self {
            host: config.get_or(Self::HOST, "0.0.0.0"),
            port,
            seed_file: config
                .get(Self::SEED_FILE)
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            log_format,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
