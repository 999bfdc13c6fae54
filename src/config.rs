//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export LISTEN="127.0.0.1:8080"
//! export SHORT_BASE_URL="https://short.ly"
//! export SIMULATED_LATENCY_MS="1000"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `SHORT_BASE_URL` - Prefix of displayed short URLs (default: `https://short.ly`)
//! - `SIMULATED_LATENCY_MS` - Artificial delay per accepted submission (default: 1000, `0` disables)
//! - `SESSION_TTL_SECONDS` - Idle time before a session is dropped (default: 1800)
//! - `MAX_SESSIONS` - Live sessions kept in memory (default: 10000)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;
use url::Url;

/// Upper bound for `SIMULATED_LATENCY_MS`.
const MAX_SIMULATED_LATENCY_MS: u64 = 60_000;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Prefix of every displayed short URL. No resolver serves it.
    pub short_base_url: String,
    pub simulated_latency_ms: u64,
    pub session_ttl_seconds: u64,
    pub max_sessions: usize,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            short_base_url: "https://short.ly".to_string(),
            simulated_latency_ms: 1000,
            session_ttl_seconds: 1800,
            max_sessions: 10_000,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let short_base_url = env::var("SHORT_BASE_URL").unwrap_or(defaults.short_base_url);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let simulated_latency_ms =
            parse_var("SIMULATED_LATENCY_MS")?.unwrap_or(defaults.simulated_latency_ms);
        let session_ttl_seconds =
            parse_var("SESSION_TTL_SECONDS")?.unwrap_or(defaults.session_ttl_seconds);
        let max_sessions = parse_var("MAX_SESSIONS")?.unwrap_or(defaults.max_sessions);

        Ok(Self {
            listen_addr,
            short_base_url,
            simulated_latency_ms,
            session_ttl_seconds,
            max_sessions,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not `host:port`
    /// - `short_base_url` is not an absolute `http`/`https` URL
    /// - `simulated_latency_ms` exceeds one minute
    /// - `session_ttl_seconds` or `max_sessions` is zero
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        let base = Url::parse(&self.short_base_url)
            .with_context(|| format!("SHORT_BASE_URL is not a valid URL: '{}'", self.short_base_url))?;
        if base.scheme() != "http" && base.scheme() != "https" {
            anyhow::bail!(
                "SHORT_BASE_URL must use http or https, got '{}'",
                self.short_base_url
            );
        }
        if base.host_str().is_none() {
            anyhow::bail!("SHORT_BASE_URL must include a host, got '{}'", self.short_base_url);
        }

        if self.simulated_latency_ms > MAX_SIMULATED_LATENCY_MS {
            anyhow::bail!(
                "SIMULATED_LATENCY_MS is too large (max: {}), got {}",
                MAX_SIMULATED_LATENCY_MS,
                self.simulated_latency_ms
            );
        }

        if self.session_ttl_seconds == 0 {
            anyhow::bail!("SESSION_TTL_SECONDS must be greater than 0");
        }

        if self.max_sessions == 0 {
            anyhow::bail!("MAX_SESSIONS must be at least 1");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_seconds)
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Short URL base: {}", self.short_base_url);
        if self.simulated_latency_ms == 0 {
            tracing::info!("  Simulated latency: disabled");
        } else {
            tracing::info!("  Simulated latency: {}ms", self.simulated_latency_ms);
        }
        tracing::info!(
            "  Sessions: ttl {}s, max {}",
            self.session_ttl_seconds,
            self.max_sessions
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Parses an optional numeric variable; unset means `None`.
fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{name} must be a number, got '{raw}'")),
        Err(_) => Ok(None),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
