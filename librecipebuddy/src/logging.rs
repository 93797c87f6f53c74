//! Logging setup shared by the RecipeBuddy binaries
//!
//! All output goes to stderr so stdout stays clean for rendered results.
//! Format and level come from `RECIPEBUDDY_LOG_FORMAT` and
//! `RECIPEBUDDY_LOG_LEVEL` unless a binary overrides them.

use std::str::FromStr;

use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact single-line text (default)
    Text,
    /// One JSON object per line, for machine consumption
    Json,
    /// Multi-line colored output, for development
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(format!(
                "Unknown log format '{}' (expected text, json, or pretty)",
                s
            )),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
            LogFormat::Pretty => write!(f, "pretty"),
        }
    }
}

pub struct LoggingConfig {
    pub format: LogFormat,
    pub filter: String,
}

impl LoggingConfig {
    /// `filter` takes any `tracing_subscriber::EnvFilter` directive,
    /// e.g. `"info"` or `"librecipebuddy=debug"`.
    pub fn new(format: LogFormat, filter: impl Into<String>) -> Self {
        Self {
            format,
            filter: filter.into(),
        }
    }

    /// Install the global subscriber. `RUST_LOG` wins over the configured
    /// filter when set.
    ///
    /// # Panics
    ///
    /// Panics if a global subscriber is already installed.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.filter));

        match self.format {
            LogFormat::Json => {
                tracing_subscriber::fmt()
                    .json()
                    .flatten_event(true)
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            LogFormat::Pretty => {
                tracing_subscriber::fmt()
                    .pretty()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            LogFormat::Text => {
                tracing_subscriber::fmt()
                    .compact()
                    .with_target(false)
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}

/// Initialize logging from `RECIPEBUDDY_LOG_FORMAT` and
/// `RECIPEBUDDY_LOG_LEVEL`, defaulting to compact text at info level.
pub fn init_default() {
    let format = std::env::var("RECIPEBUDDY_LOG_FORMAT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(LogFormat::Text);

    let filter = std::env::var("RECIPEBUDDY_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    LoggingConfig::new(format, filter).init();
}

/// Logging setup for the one-shot CLI tools: errors only unless `verbose`
/// is set, so normal runs print nothing but the rendered screen. The
/// format still honors `RECIPEBUDDY_LOG_FORMAT`.
pub fn init_cli(verbose: bool) {
    let format = std::env::var("RECIPEBUDDY_LOG_FORMAT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(LogFormat::Text);

    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RECIPEBUDDY_LOG_LEVEL").unwrap_or_else(|_| "error".to_string())
    };

    LoggingConfig::new(format, filter).init();
}
