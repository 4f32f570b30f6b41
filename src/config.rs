//! Configuration module for the Excelsior site.

use serde::Deserialize;
use std::path::Path;

use crate::{Result, SiteError};

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// CORS allowed origins (empty allows any origin without credentials).
    #[serde(default)]
    pub cors_origins: Vec<String>,
    /// Upper bound on the time spent handling one request.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    /// Maximum accepted request body size in bytes.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_request_timeout() -> u64 {
    30
}

fn default_max_body_bytes() -> usize {
    64 * 1024
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![],
            request_timeout_secs: default_request_timeout(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

/// Public site information shown on the landing page.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Company name.
    #[serde(default = "default_site_name")]
    pub name: String,
    /// Hero tagline.
    #[serde(default = "default_tagline")]
    pub tagline: String,
    /// Hero description, also used as the meta description.
    #[serde(default = "default_description")]
    pub description: String,
    /// Public contact email address.
    #[serde(default = "default_contact_email")]
    pub contact_email: String,
    /// WhatsApp / phone number.
    #[serde(default = "default_phone")]
    pub phone: String,
}

fn default_site_name() -> String {
    "Excelsior AI Solutions".to_string()
}

fn default_tagline() -> String {
    "Smarter Solutions. Stronger Business.".to_string()
}

fn default_description() -> String {
    "We deliver advanced AI automation, chatbots, and workflow systems designed to optimize how your business operates.".to_string()
}

fn default_contact_email() -> String {
    "contact@excelsior-ai.com".to_string()
}

fn default_phone() -> String {
    "+1 (234) 567-890".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            tagline: default_tagline(),
            description: default_description(),
            contact_email: default_contact_email(),
            phone: default_phone(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file. Empty disables file logging.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/excelsior.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Site information.
    #[serde(default)]
    pub site: SiteConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(SiteError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| SiteError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `EXCELSIOR_HOST`: bind address
    /// - `EXCELSIOR_PORT`: listen port
    /// - `EXCELSIOR_LOG_LEVEL`: log level
    ///
    /// Empty or unparsable values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("EXCELSIOR_HOST") {
            if !host.is_empty() {
                self.server.host = host;
            }
        }

        if let Ok(port) = std::env::var("EXCELSIOR_PORT") {
            match port.parse::<u16>() {
                Ok(port) => self.server.port = port,
                Err(_) if port.is_empty() => {}
                // Runs before logging is initialized.
                Err(e) => eprintln!("Ignoring invalid EXCELSIOR_PORT {port:?}: {e}"),
            }
        }

        if let Ok(level) = std::env::var("EXCELSIOR_LOG_LEVEL") {
            if !level.is_empty() {
                self.logging.level = level;
            }
        }
    }

    /// Validate the configuration.
    ///
    /// Returns an error if:
    /// - the request timeout is zero
    /// - the body size limit is zero
    /// - the site name is empty
    pub fn validate(&self) -> Result<()> {
        if self.server.request_timeout_secs == 0 {
            return Err(SiteError::Config(
                "server.request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.server.max_body_bytes == 0 {
            return Err(SiteError::Config(
                "server.max_body_bytes must be greater than zero".to_string(),
            ));
        }
        if self.site.name.trim().is_empty() {
            return Err(SiteError::Config("site.name must not be empty".to_string()));
        }
        Ok(())
    }
}
