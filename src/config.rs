//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `DATABASE_PATH` - SQLite database file (default: `data/urls.db`).
//!   The parent directory is created on startup if missing.
//! - `BASE_URL` - Public base used to build short URLs (optional). When unset,
//!   short URLs are derived from each request's `Host` header.
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `CODE_LENGTH` - Length of generated short codes (default: 7)
//! - `DB_MAX_CONNECTIONS` - Connection pool size (default: 5)

use anyhow::Result;
use std::env;

/// Default length of generated short codes.
///
/// Seven characters over a 62-character alphabet give 62^7 (~3.5e12) possible
/// codes, so collisions stay rare at this system's scale.
pub const DEFAULT_CODE_LENGTH: usize = 7;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the SQLite database file.
    pub database_path: String,
    /// Public base URL for constructing short URLs.
    /// Falls back to the request's own host when unset.
    pub base_url: Option<String>,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Length of generated short codes.
    pub code_length: usize,
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let database_path =
            env::var("DATABASE_PATH").unwrap_or_else(|_| "data/urls.db".to_string());

        let base_url = env::var("BASE_URL").ok().filter(|v| !v.is_empty());

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let code_length = env::var("CODE_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_CODE_LENGTH);

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        Self {
            database_path,
            base_url,
            listen_addr,
            log_level,
            log_format,
            code_length,
            db_max_connections,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `database_path` is empty
    /// - `base_url` is set but not an http(s) URL
    /// - `listen_addr` is not in `host:port` form
    /// - `log_format` is not `text` or `json`
    /// - `code_length` is outside 4..=32
    /// - `db_max_connections` is 0
    pub fn validate(&self) -> Result<()> {
        if self.database_path.is_empty() {
            anyhow::bail!("DATABASE_PATH must not be empty");
        }

        if let Some(ref base_url) = self.base_url {
            if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
                anyhow::bail!(
                    "BASE_URL must start with 'http://' or 'https://', got '{}'",
                    base_url
                );
            }
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.code_length < 4 || self.code_length > 32 {
            anyhow::bail!(
                "CODE_LENGTH must be between 4 and 32, got {}",
                self.code_length
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_path);

        match self.base_url {
            Some(ref base_url) => tracing::info!("  Base URL: {}", base_url),
            None => tracing::info!("  Base URL: derived from request host"),
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Code length: {}", self.code_length);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn base_config() -> Config {
        Config {
            database_path: "data/urls.db".to_string(),
            base_url: None,
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            code_length: 7,
            db_max_connections: 5,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = base_config();
        assert!(config.validate().is_ok());

        // Invalid log format
        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        // Invalid listen address
        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();

        // Empty database path
        config.database_path = String::new();
        assert!(config.validate().is_err());

        config.database_path = "urls.db".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_base_url_must_be_http() {
        let mut config = base_config();

        config.base_url = Some("https://sho.rt".to_string());
        assert!(config.validate().is_ok());

        config.base_url = Some("ftp://sho.rt".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_code_length_bounds() {
        let mut config = base_config();

        config.code_length = 3;
        assert!(config.validate().is_err());

        config.code_length = 4;
        assert!(config.validate().is_ok());

        config.code_length = 32;
        assert!(config.validate().is_ok());

        config.code_length = 33;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("DATABASE_PATH");
            env::remove_var("BASE_URL");
            env::remove_var("LISTEN");
            env::remove_var("LOG_FORMAT");
            env::remove_var("CODE_LENGTH");
            env::remove_var("DB_MAX_CONNECTIONS");
        }

        let config = Config::from_env();

        assert_eq!(config.database_path, "data/urls.db");
        assert!(config.base_url.is_none());
        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.log_format, "text");
        assert_eq!(config.code_length, DEFAULT_CODE_LENGTH);
        assert_eq!(config.db_max_connections, 5);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("DATABASE_PATH", "/tmp/test-urls.db");
            env::set_var("BASE_URL", "https://sho.rt");
            env::set_var("CODE_LENGTH", "9");
        }

        let config = Config::from_env();

        assert_eq!(config.database_path, "/tmp/test-urls.db");
        assert_eq!(config.base_url.as_deref(), Some("https://sho.rt"));
        assert_eq!(config.code_length, 9);

        // Cleanup
        unsafe {
            env::remove_var("DATABASE_PATH");
            env::remove_var("BASE_URL");
            env::remove_var("CODE_LENGTH");
        }
    }

    #[test]
    #[serial]
    fn test_unparseable_code_length_falls_back_to_default() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("CODE_LENGTH", "seven");
        }

        let config = Config::from_env();
        assert_eq!(config.code_length, DEFAULT_CODE_LENGTH);

        // Cleanup
        unsafe {
            env::remove_var("CODE_LENGTH");
        }
    }
}
