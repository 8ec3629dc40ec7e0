//! Document title with an explicit unset state.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// User-visible document title.
///
/// Persisted as JSON `null` ([`DocumentName::Unset`]) or a string. An empty
/// string round-trips as [`DocumentName::Empty`] and is never treated as a
/// usable name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum DocumentName {
	/// No name assigned; derive one on demand.
	#[default]
	Unset,
	/// Present but blank.
	Empty,
	/// A non-empty title.
	Named(String),
}

impl DocumentName {
	/// Classifies an optional raw title.
	pub fn from_option(raw: Option<String>) -> Self {
		match raw {
			None => Self::Unset,
			Some(s) if s.is_empty() => Self::Empty,
			Some(s) => Self::Named(s),
		}
	}

	/// Returns the title only when it is meaningful.
	pub fn as_named(&self) -> Option<&str> {
		match self {
			Self::Named(name) => Some(name),
			Self::Unset | Self::Empty => None,
		}
	}

	pub fn is_named(&self) -> bool {
		matches!(self, Self::Named(_))
	}

	pub fn is_unset(&self) -> bool {
		matches!(self, Self::Unset)
	}

	fn as_raw(&self) -> Option<&str> {
		match self {
			Self::Unset => None,
			Self::Empty => Some(""),
			Self::Named(name) => Some(name),
		}
	}
}

impl From<&str> for DocumentName {
	fn from(raw: &str) -> Self {
		Self::from_option(Some(raw.to_owned()))
	}
}

impl From<String> for DocumentName {
	fn from(raw: String) -> Self {
		Self::from_option(Some(raw))
	}
}

impl From<Option<String>> for DocumentName {
	fn from(raw: Option<String>) -> Self {
		Self::from_option(raw)
	}
}

impl fmt::Display for DocumentName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Unset => f.write_str("<unset>"),
			Self::Empty => f.write_str("<empty>"),
			Self::Named(name) => f.write_str(name),
		}
	}
}

impl Serialize for DocumentName {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.as_raw().serialize(serializer)
	}
}

impl<'de> Deserialize<'de> for DocumentName {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		Option::<String>::deserialize(deserializer).map(Self::from_option)
	}
}
