//! Error types for the conflib library.
//!
//! This module provides the error hierarchy for configuration loading and
//! lookup, using `thiserror` for ergonomic error handling. A key that is
//! missing from every layer is never an error; only broken inputs are.

use std::path::PathBuf;

use thiserror::Error;

use crate::layer::Layer;

/// Result type alias for operations that may fail with a conflib error.
///
/// # Examples
///
/// ```
/// use conflib::{Error, Result};
///
/// fn example_operation() -> Result<i64> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the conflib library.
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration file exists but could not be read.
    #[error("failed to read configuration file {}: {source}", path.display())]
    ConfigRead {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A configuration file was read but is not a valid document.
    #[error("invalid configuration file {}: {message}", path.display())]
    ConfigParse {
        /// The file that failed to parse.
        path: PathBuf,
        /// Parser diagnostic.
        message: String,
    },

    /// A command-line argument that implies key/value structure is malformed.
    #[error("invalid argument '{argument}': {reason}")]
    InvalidArgument {
        /// The raw argument text.
        argument: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The value stored for a key cannot be extracted as the requested type.
    #[error("type mismatch for '{key}' in {layer} layer: expected {expected}, found {found}")]
    TypeMismatch {
        /// The key that was looked up.
        key: String,
        /// The layer that supplied the value.
        layer: Layer,
        /// The type the caller asked for.
        expected: &'static str,
        /// The type actually stored.
        found: &'static str,
    },

    /// A `~` path was given but the home directory is unknown.
    #[error("cannot expand {}: home directory could not be determined", path.display())]
    HomeDirectory {
        /// The path that needed expansion.
        path: PathBuf,
    },
}

impl Error {
    /// Check if the error came from a configuration file on disk.
    ///
    /// # Examples
    ///
    /// ```
    /// use conflib::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::ConfigParse {
    ///     path: PathBuf::from("/opt/coderrect/conf/coderrect.json"),
    ///     message: "expected value".to_string(),
    /// };
    /// assert!(err.is_config_file());
    /// ```
    #[must_use]
    pub fn is_config_file(&self) -> bool {
        matches!(self, Self::ConfigRead { .. } | Self::ConfigParse { .. })
    }

    /// Check if the error is a rejected command-line argument.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
