use std::path::PathBuf;

use anyhow::{anyhow, Context};

use crate::history::DEFAULT_RETENTION_DAYS;

/// Runtime configuration, read from the environment after `.env` is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub history: HistoryConfig,
    pub smart_data: SmartDataConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryConfig {
    /// JSON file used by the command-line renderer
    pub path: PathBuf,
    pub retention_days: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmartDataConfig {
    /// JSON file of the clients and items remembered by the renderer
    pub path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            history: HistoryConfig {
                path: PathBuf::from("invoice_history.json"),
                retention_days: DEFAULT_RETENTION_DAYS,
            },
            smart_data: SmartDataConfig {
                path: PathBuf::from("smart_data.json"),
            },
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SERVER_PORT` or `HISTORY_RETENTION_DAYS` is set
    /// but not a valid number.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] over an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match var("SERVER_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("Invalid SERVER_PORT: {raw}"))?,
            None => defaults.server.port,
        };

        let retention_days = match var("HISTORY_RETENTION_DAYS") {
            Some(raw) => {
                let days = raw
                    .trim()
                    .parse::<i64>()
                    .with_context(|| format!("Invalid HISTORY_RETENTION_DAYS: {raw}"))?;
                if days < 0 {
                    return Err(anyhow!("HISTORY_RETENTION_DAYS must not be negative"));
                }
                days
            }
            None => defaults.history.retention_days,
        };

        Ok(Self {
            server: ServerConfig {
                host: var("SERVER_HOST").unwrap_or(defaults.server.host),
                port,
            },
            history: HistoryConfig {
                path: var("HISTORY_PATH")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.history.path),
                retention_days,
            },
            smart_data: SmartDataConfig {
                path: var("SMART_DATA_PATH")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.smart_data.path),
            },
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
