//! Configuration module for the CMS backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::AppError;

/// Which key/value store backs the content collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Sqlite,
    Memory,
}

impl FromStr for StoreKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sqlite" => Ok(StoreKind::Sqlite),
            "memory" => Ok(StoreKind::Memory),
            _ => Err(AppError::BadRequest(format!("Invalid CMS_STORE: {}", s))),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Store backend (sqlite or memory)
    pub store: StoreKind,
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Rows per list page when the request does not ask for one
    pub page_size: usize,
    /// Simulated round trip of the account verification flow
    pub verify_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: StoreKind::Sqlite,
            db_path: PathBuf::from("./data/cms.sqlite"),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            log_level: "info".to_string(),
            page_size: 10,
            verify_delay: Duration::from_millis(1500),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let store = match env::var("CMS_STORE") {
            Ok(raw) => raw.parse::<StoreKind>()?,
            Err(_) => defaults.store,
        };

        let db_path = env::var("CMS_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.db_path);

        let bind_addr = match env::var("CMS_BIND_ADDR") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| AppError::BadRequest(format!("Invalid CMS_BIND_ADDR: {}", raw)))?,
            Err(_) => defaults.bind_addr,
        };

        let log_level = env::var("CMS_LOG_LEVEL").unwrap_or(defaults.log_level);

        let page_size = match env::var("CMS_PAGE_SIZE") {
            Ok(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(AppError::BadRequest(format!(
                        "Invalid CMS_PAGE_SIZE: {}",
                        raw
                    )))
                }
            },
            Err(_) => defaults.page_size,
        };

        let verify_delay = match env::var("CMS_VERIFY_DELAY_MS") {
            Ok(raw) => raw.parse::<u64>().map(Duration::from_millis).map_err(|_| {
                AppError::BadRequest(format!("Invalid CMS_VERIFY_DELAY_MS: {}", raw))
            })?,
            Err(_) => defaults.verify_delay,
        };

        Ok(Self {
            store,
            db_path,
            bind_addr,
            log_level,
            page_size,
            verify_delay,
        })
    }
}
