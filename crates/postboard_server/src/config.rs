//! Process configuration from command-line flags and environment.

use clap::Parser;
use std::path::PathBuf;

/// Default HTTP bind address.
pub const BIND_ADDRESS_DEFAULT: &str = "127.0.0.1:8080";

const LOG_DIR_NAME: &str = "postboard-logs";

/// Post board REST server.
#[derive(Parser, Debug, Clone)]
#[command(name = "postboard")]
#[command(about = "Blog post CRUD backend over SQLite")]
#[command(version)]
pub struct Config {
    /// HTTP bind address.
    #[arg(long, env = "POSTBOARD_BIND", default_value = BIND_ADDRESS_DEFAULT)]
    pub bind: String,

    /// SQLite database file; an in-memory database is used when omitted.
    #[arg(long, env = "POSTBOARD_DB_PATH")]
    pub db_path: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error).
    #[arg(long, env = "POSTBOARD_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files.
    #[arg(long, env = "POSTBOARD_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Config {
    /// Effective log level, falling back to the build-mode default.
    pub fn log_level(&self) -> &str {
        self.log_level
            .as_deref()
            .unwrap_or(postboard_core::default_log_level())
    }

    /// Effective log directory, falling back to `<temp>/postboard-logs`.
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(LOG_DIR_NAME))
    }
}
