//! Declinekit Logging
//!
//! Installs a `tracing` subscriber configured from `DECLINEKIT_*`
//! environment variables. Library crates in this workspace only emit
//! `tracing` events; applications call [`init`] once at startup.
//!
//! # Usage
//!
//! ```rust,no_run
//! declinekit_log::init();
//!
//! tracing::info!(code = 2000, "Payment declined by processor");
//! ```
//!
//! # Environment Variables
//!
//! - `DECLINEKIT_DEBUG=1` - Enable debug logging
//! - `DECLINEKIT_LOG_LEVEL=trace|debug|info|warn|error|off` - Set log level
//! - `DECLINEKIT_LOG_FORMAT=pretty|json|compact` - Set output format
//! - `DECLINEKIT_LOG_COLOR=1|0` - Enable/disable colors
//! - `RUST_LOG` - Full filter directives, overrides the level when set

use once_cell::sync::Lazy;
use std::env;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

// ============================================================================
// Log Levels
// ============================================================================

/// Minimum level for emitted events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Trace level (most verbose)
    Trace,
    /// Debug level
    Debug,
    /// Info level
    Info,
    /// Warning level
    Warn,
    /// Error level (least verbose)
    Error,
    /// Off (no logging)
    Off,
}

impl Level {
    /// Get level from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Some(Level::Trace),
            "debug" => Some(Level::Debug),
            "info" => Some(Level::Info),
            "warn" | "warning" => Some(Level::Warn),
            "error" => Some(Level::Error),
            "off" | "none" => Some(Level::Off),
            _ => None,
        }
    }

    /// Filter directive for this level.
    pub fn as_directive(&self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Off => "off",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_directive())
    }
}

// ============================================================================
// Log Format
// ============================================================================

/// Output format for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Multi-line human readable output
    Pretty,
    /// Single-line output
    Compact,
    /// JSON lines for log aggregation
    Json,
}

impl Format {
    /// Get format from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Some(Format::Pretty),
            "compact" => Some(Format::Compact),
            "json" => Some(Format::Json),
            _ => None,
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Whether debug mode is enabled
    pub debug: bool,
    /// Minimum log level
    pub level: Level,
    /// Output format
    pub format: Format,
    /// Whether ANSI colors are enabled
    pub color: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            debug: false,
            level: Level::Info,
            format: Format::Json,
            color: false,
        }
    }
}

impl LogConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create config from an arbitrary key lookup.
    ///
    /// Unset or unparsable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |key: &str| {
            lookup(key).map(|v| {
                let v = v.trim().to_lowercase();
                v == "1" || v == "true"
            })
        };

        let debug = flag("DECLINEKIT_DEBUG").unwrap_or(false);

        let level = lookup("DECLINEKIT_LOG_LEVEL")
            .and_then(|s| Level::parse(&s))
            .unwrap_or(if debug { Level::Debug } else { Level::Info });

        let format = lookup("DECLINEKIT_LOG_FORMAT")
            .and_then(|s| Format::parse(&s))
            .unwrap_or(Format::Json);

        let color = flag("DECLINEKIT_LOG_COLOR")
            .unwrap_or_else(|| lookup("NO_COLOR").is_none() && lookup("TERM").is_some());

        Self {
            debug,
            level,
            format,
            color,
        }
    }

    /// Build the event filter, preferring `RUST_LOG` when it is set.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.level.as_directive()))
    }
}

/// Global configuration (lazy initialized).
static CONFIG: Lazy<LogConfig> = Lazy::new(LogConfig::from_env);

/// Get the global configuration.
pub fn config() -> &'static LogConfig {
    &CONFIG
}

// ============================================================================
// Errors
// ============================================================================

/// Logging setup errors
#[derive(Error, Debug)]
pub enum LogError {
    /// A global subscriber is already installed
    #[error("Failed to install subscriber: {0}")]
    Install(#[from] tracing_subscriber::util::TryInitError),
}

/// Result type for logging setup
pub type Result<T> = std::result::Result<T, LogError>;

// ============================================================================
// Subscriber Installation
// ============================================================================

/// Install the global subscriber for `config`.
pub fn try_init(config: &LogConfig) -> Result<()> {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{fmt, registry};

    let filter = config.env_filter();

    match config.format {
        Format::Json => registry()
            .with(filter)
            .with(fmt::layer().json().with_ansi(false))
            .try_init()?,
        Format::Pretty => registry()
            .with(filter)
            .with(fmt::layer().pretty().with_ansi(config.color))
            .try_init()?,
        Format::Compact => registry()
            .with(filter)
            .with(fmt::layer().compact().with_ansi(config.color))
            .try_init()?,
    }

    tracing::debug!(
        level = %config.level,
        format = ?config.format,
        "Logging initialized"
    );
    Ok(())
}

/// Install the global subscriber from the environment.
///
/// Does nothing if a subscriber is already installed.
pub fn init() {
    let _ = try_init(config());
}

// ============================================================================
// Tests
// ============================================================================
