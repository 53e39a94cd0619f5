//! Error types for argument extraction and configuration validation.

use thiserror::Error;

/// A fatal command-line usage error.
///
/// Raised by argument extraction; aborts startup before any transport or
/// database work is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    /// A value flag appeared as the last token with nothing after it.
    #[error("Option '{flag}' requires a value")]
    MissingValue {
        /// The flag that is missing its value
        flag: &'static str,
    },

    /// A boolean switch was written in `--name=value` form.
    #[error("Option '{flag}' does not take a value (got '{value}')")]
    UnexpectedValue {
        /// The switch name
        flag: &'static str,
        /// The value that was attached to it
        value: String,
    },

    /// More than one positional argument was given.
    #[error("Too many positional arguments: '{extra}' given after '{first}'")]
    TooManyPositionals {
        /// The positional value already captured
        first: String,
        /// The extra positional value
        extra: String,
    },

    /// The required connection string was not given.
    #[error("Missing required argument: database connection string")]
    MissingPositional,

    /// A token looked like an option but is not recognized.
    #[error("Unknown option '{0}'")]
    UnknownOption(String),

    /// A flag value could not be parsed into the expected type.
    #[error("Invalid value '{value}' for '{flag}': {reason}")]
    InvalidValue {
        /// The flag whose value is invalid
        flag: &'static str,
        /// The rejected value
        value: String,
        /// Reason for rejection
        reason: String,
    },
}

/// Error type for building the validated server configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Command-line usage error.
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// The connection string is empty or only whitespace.
    #[error("Database connection string is empty")]
    EmptyConnectionString,
}

impl ConfigError {
    /// Returns true if this error is a command-line usage error.
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}
