//! Error types for the Folio site.

use std::io;
use std::path::PathBuf;

/// Result type alias for site operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring, building or exporting the site.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configuration file could not be parsed.
    #[error("Invalid configuration in {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Configuration text could not be parsed.
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A configuration value is out of range.
    #[error("Invalid configuration value for '{field}': {message}")]
    InvalidConfig { field: &'static str, message: String },

    /// A filesystem operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No page is served at the requested path.
    #[error("No page at route '{0}'")]
    UnknownRoute(String),

    /// A content URL is malformed.
    #[error("Invalid URL '{value}': {source}")]
    Url {
        value: String,
        #[source]
        source: url::ParseError,
    },

    /// A content date is malformed.
    #[error("Invalid date '{value}': {source}")]
    Date {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Error from the core crate.
    #[error(transparent)]
    Core(#[from] folio_core::Error),

    /// Error from the style crate.
    #[error(transparent)]
    Style(#[from] folio_style::Error),
}

impl Error {
    /// Create an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an out-of-range configuration error.
    pub fn invalid_config(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            message: message.into(),
        }
    }
}
