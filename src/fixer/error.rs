//! Error types for fixer configuration and execution.

use thiserror::Error;

/// Errors raised while resolving or validating fixer options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required option is absent or blank.
    #[error("Configuration option \"{name}\" is required.")]
    MissingOption { name: &'static str },

    /// An option the fixer does not define.
    #[error("Unknown configuration option \"{name}\".")]
    UnknownOption { name: String },

    /// An option with a value of the wrong type.
    #[error("Configuration option \"{name}\" expects {expected}, got {found}.")]
    InvalidType {
        name: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

impl ConfigError {
    /// Create a missing option error.
    pub fn missing(name: &'static str) -> Self {
        Self::MissingOption { name }
    }

    /// Create an unknown option error.
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownOption { name: name.into() }
    }
}

/// Errors that abort a fix pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixerError {
    /// Invalid configuration, detected before any token is read.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
