//! Keyboard event types.

mod modifiers;

use std::fmt;

pub use modifiers::{Modifiers, RawModifiers};
use serde::{Deserialize, Serialize};

/// Platform family, used only to decide which physical key is "primary".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
	/// macOS, iOS and friends: Cmd is primary.
	Apple,
	/// Everything else: Ctrl is primary.
	#[default]
	Other,
}

impl Platform {
	/// Platform of the running binary.
	pub fn current() -> Self {
		if cfg!(any(target_os = "macos", target_os = "ios")) {
			Self::Apple
		} else {
			Self::Other
		}
	}
}

/// A single key press.
///
/// `key` is the logical key value: a single character (`"p"`, `"P"`, `"/"`)
/// or a named key (`"Enter"`, `"ArrowUp"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyEvent {
	pub key: String,
	pub modifiers: Modifiers,
}

impl KeyEvent {
	pub fn new(key: impl Into<String>, modifiers: Modifiers) -> Self {
		Self {
			key: key.into(),
			modifiers,
		}
	}

	/// Unmodified key press.
	pub fn plain(key: impl Into<String>) -> Self {
		Self::new(key, Modifiers::NONE)
	}

	/// Returns true if `key` equals `expected` ignoring ASCII case.
	pub fn key_eq_ignore_case(&self, expected: &str) -> bool {
		self.key.eq_ignore_ascii_case(expected)
	}
}

impl fmt::Display for KeyEvent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.modifiers.primary {
			f.write_str("primary+")?;
		}
		if self.modifiers.alt {
			f.write_str("alt+")?;
		}
		if self.modifiers.shift {
			f.write_str("shift+")?;
		}
		f.write_str(&self.key)
	}
}
