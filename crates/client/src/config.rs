//! # Client Configuration
//!
//! Loads the backend location and the acting identities from environment variables.
//!
//! ## Environment Variables
//!
//! - `API_BASE_URL`: Base URL of the REST backend (default: "http://localhost:4000/api")
//! - `API_REQUEST_TIMEOUT_SECONDS`: Per-request timeout (default: 30)
//! - `CANCHAS_USER_ID`: Backend user that reservations are created for
//! - `CANCHAS_ADMIN_ID`: Administrator whose reservations are managed
//! - `RESERVAS_REFRESH_SECONDS`: Period of the reservation refresh (default: 30)
//! - `LOG_LEVEL`: Logging level (default: "info")

use std::env;
use std::time::Duration;

use eyre::{Result, WrapErr};
use tracing::Level;

pub const DEFAULT_BASE_URL: &str = "http://localhost:4000/api";

/// Configuration shared by the HTTP client and the flows.
///
/// The user and administrator identifiers are optional so a front-end can start
/// without them; flows that need a missing identifier fail before sending anything.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL, without trailing slash
    pub base_url: String,

    /// Timeout applied to every request
    pub request_timeout: Duration,

    /// Identity used when creating reservations
    pub user_id: Option<String>,

    /// Identity used when listing and deciding reservations
    pub admin_id: Option<String>,

    /// Period of the reservation board refresh
    pub refresh_interval: Duration,

    /// Log level for the application
    pub log_level: Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(30),
            user_id: None,
            admin_id: None,
            refresh_interval: Duration::from_secs(30),
            log_level: Level::INFO,
        }
    }
}

impl ClientConfig {
    /// Creates a new ClientConfig from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric setting cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("API_BASE_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let request_timeout = lookup("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|| "30".to_string())
            .parse()
            .map(Duration::from_secs)
            .wrap_err("Invalid API_REQUEST_TIMEOUT_SECONDS value")?;

        let refresh_interval = lookup("RESERVAS_REFRESH_SECONDS")
            .unwrap_or_else(|| "30".to_string())
            .parse()
            .map(Duration::from_secs)
            .wrap_err("Invalid RESERVAS_REFRESH_SECONDS value")?;

        // Identity settings
        let user_id = lookup("CANCHAS_USER_ID").filter(|id| !id.trim().is_empty());
        let admin_id = lookup("CANCHAS_ADMIN_ID").filter(|id| !id.trim().is_empty());

        let log_level = match lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        Ok(Self {
            base_url,
            request_timeout,
            user_id,
            admin_id,
            refresh_interval,
            log_level,
        })
    }
}
