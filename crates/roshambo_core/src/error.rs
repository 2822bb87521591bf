//! Error types for the simulation engine.
//!
//! The engine itself never fails mid-run: numeric corner cases are resolved
//! by substitution. Errors only arise while loading or validating
//! configuration and while exporting snapshots.

use thiserror::Error;

/// Main error type for roshambo_core operations.
#[derive(Error, Debug)]
pub enum SimError {
    /// A configuration value is out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration file is not valid TOML for `SimConfig`
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// File system errors
    #[error("File system error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{context}: {source}")]
    Context {
        context: String,
        source: Box<SimError>,
    },
}

/// Result type alias for roshambo_core operations.
pub type Result<T> = std::result::Result<T, SimError>;

impl SimError {
    /// Creates a new configuration error.
    #[must_use]
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Wraps an error with additional context.
    #[must_use]
    pub fn with_context<S: Into<String>>(self, context: S) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// True for errors caused by bad configuration values or syntax.
    #[must_use]
    pub fn is_config(&self) -> bool {
        match self {
            Self::InvalidConfig(_) | Self::ConfigParse(_) => true,
            Self::Context { source, .. } => source.is_config(),
            _ => false,
        }
    }
}
