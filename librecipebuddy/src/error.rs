//! Error types for RecipeBuddy

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RecipeBuddyError>;

#[derive(Error, Debug)]
pub enum RecipeBuddyError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Data source error: {0}")]
    Source(#[from] SourceError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl RecipeBuddyError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            RecipeBuddyError::InvalidInput(_) => 3,
            RecipeBuddyError::Config(_) => 2,
            RecipeBuddyError::Source(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

/// Failures produced by a [`RecipeDataSource`](crate::source::RecipeDataSource).
///
/// The `Display` form carries the failure kind and is what ends up in logs.
/// [`message`](SourceError::message) yields just the cause description, which
/// is what an error slot in the home state carries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

impl SourceError {
    /// The bare failure description, without the kind prefix
    pub fn message(&self) -> &str {
        match self {
            SourceError::Network(msg) => msg,
            SourceError::Decode(msg) => msg,
        }
    }
}
