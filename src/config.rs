//! Configuration management for kona.
//!
//! This module handles the layered configuration system with the following precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{KonaError, Result};

/// Command-line arguments for kona
#[derive(Parser, Debug)]
#[command(name = "kona")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the SQLite dataset to serve
    pub database: PathBuf,

    /// Host address to bind to
    #[arg(short = 'H', long, env = "KONA_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "KONA_PORT", default_value = "5000")]
    pub port: u16,

    /// Number of worker threads
    #[arg(short, long, env = "KONA_WORKERS")]
    pub workers: Option<usize>,

    /// Maximum number of concurrent store sessions
    #[arg(long, env = "KONA_MAX_SESSIONS")]
    pub max_sessions: Option<usize>,

    /// Reject range queries whose dates are not valid YYYY-MM-DD dates
    #[arg(long, env = "KONA_STRICT_DATES")]
    pub strict_dates: bool,

    /// Path to JSON configuration file
    #[arg(short, long, env = "KONA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "KONA_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of worker threads (None = number of CPU cores)
    #[serde(default)]
    pub workers: Option<usize>,
}

/// Dataset and query configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Path to the SQLite dataset
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    /// Upper bound on store sessions held at the same time
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,

    /// How long a request waits for a store session before giving up
    #[serde(default = "default_acquire_timeout_ms")]
    pub acquire_timeout_ms: u64,

    /// Reject malformed range dates instead of comparing them as plain strings
    #[serde(default)]
    pub strict_dates: bool,
}

/// Complete configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Data configuration
    #[serde(default)]
    pub data: DataConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load() -> Result<(Self, PathBuf)> {
        Self::from_args(Args::parse())
    }

    /// Build configuration from already parsed arguments
    pub fn from_args(args: Args) -> Result<(Self, PathBuf)> {
        // Start with defaults
        let mut config = Config::default();

        // Load from JSON file if provided
        if let Some(config_path) = &args.config {
            let json_config = Self::load_from_file(config_path)?;
            config.merge(json_config);
        }

        // Override with command-line arguments
        config.server.host = args.host;
        config.server.port = args.port;
        if args.workers.is_some() {
            config.server.workers = args.workers;
        }
        if let Some(max_sessions) = args.max_sessions {
            config.data.max_sessions = max_sessions;
        }
        if args.strict_dates {
            config.data.strict_dates = true;
        }
        config.log_level = args.log_level;

        // Dataset path from command line takes precedence
        let database_path = args.database;
        config.data.database_path = Some(database_path.clone());

        Ok((config, database_path))
    }

    /// Load configuration from a JSON file
    fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        self.server.host = other.server.host;
        self.server.port = other.server.port;
        if other.server.workers.is_some() {
            self.server.workers = other.server.workers;
        }
        self.data = other.data;
        self.log_level = other.log_level;
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.host.is_empty() {
            return Err(KonaError::Config {
                message: "Server host cannot be empty".to_string(),
            });
        }

        // Validate port (0 is not a valid port for users)
        if self.server.port == 0 {
            return Err(KonaError::Config {
                message: "Server port cannot be 0".to_string(),
            });
        }

        if self.server.workers == Some(0) {
            return Err(KonaError::Config {
                message: "Worker count cannot be 0".to_string(),
            });
        }

        if self.data.max_sessions == 0 {
            return Err(KonaError::Config {
                message: "max_sessions must be at least 1".to_string(),
            });
        }

        // Validate log level
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(KonaError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            data: DataConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            max_sessions: default_max_sessions(),
            acquire_timeout_ms: default_acquire_timeout_ms(),
            strict_dates: false,
        }
    }
}

// Default value functions for serde
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_max_sessions() -> usize {
    64
}

fn default_acquire_timeout_ms() -> u64 {
    2000
}

fn default_log_level() -> String {
    "info".to_string()
}
