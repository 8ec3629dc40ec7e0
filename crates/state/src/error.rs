//! Error types for decoding persisted state.

use thiserror::Error;

/// Errors that can occur when decoding or encoding an [`crate::AppState`].
#[derive(Debug, Error)]
pub enum StateError {
	/// Malformed JSON, or a `name` that is neither null nor a string.
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	/// The top-level JSON value is not an object.
	#[error("app state must be a JSON object, found {0}")]
	NotAnObject(&'static str),
}

/// Result type for state operations.
pub type Result<T> = std::result::Result<T, StateError>;
