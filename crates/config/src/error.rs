//! Error types for configuration parsing.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when parsing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or an unknown key.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A value parsed but is not acceptable.
	#[error("invalid value for {field}: {reason}")]
	InvalidValue {
		field: &'static str,
		reason: String,
	},
}

/// Non-fatal issue found while parsing configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
	pub message: String,
}

impl fmt::Display for ConfigWarning {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Warning: {}", self.message)
	}
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
