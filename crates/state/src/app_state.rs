//! Application state bag.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{Result, StateError};
use crate::name::DocumentName;

/// JSON key holding the document title.
pub const NAME_KEY: &str = "name";

/// Document and session state of one editor session.
///
/// Only the title is typed. Every other field (zoom, scroll offsets, active
/// tool, ...) is carried opaquely and serialized alongside `name` as one flat
/// JSON object. The opaque map never holds a `name` key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
	#[serde(default)]
	pub name: DocumentName,
	#[serde(flatten)]
	pub(crate) fields: Map<String, Value>,
}

impl AppState {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns a copy titled `name`.
	pub fn with_name(self, name: impl Into<DocumentName>) -> Self {
		Self {
			name: name.into(),
			..self
		}
	}

	/// Returns a copy with `key` set to `value`.
	pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		self.set_field(key, value);
		self
	}

	/// All opaque fields.
	pub fn fields(&self) -> &Map<String, Value> {
		&self.fields
	}

	/// Looks up an opaque field.
	pub fn field(&self, key: &str) -> Option<&Value> {
		self.fields.get(key)
	}

	/// Sets an opaque field, returning the previous value.
	///
	/// The title lives in [`AppState::name`]; a `name` key is dropped.
	pub fn set_field(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
		let key = key.into();
		if key == NAME_KEY {
			warn!("ignoring opaque `{NAME_KEY}` field; set AppState::name instead");
			return None;
		}
		self.fields.insert(key, value.into())
	}

	pub fn remove_field(&mut self, key: &str) -> Option<Value> {
		self.fields.remove(key)
	}

	/// Decodes a persisted state object.
	pub fn from_json(input: &str) -> Result<Self> {
		let value: Value = serde_json::from_str(input)?;
		Self::from_value(value)
	}

	/// Decodes an already-parsed JSON value.
	pub fn from_value(value: Value) -> Result<Self> {
		if !value.is_object() {
			return Err(StateError::NotAnObject(json_kind(&value)));
		}
		Ok(serde_json::from_value(value)?)
	}

	pub fn to_json(&self) -> Result<String> {
		Ok(serde_json::to_string(self)?)
	}

	pub fn to_json_pretty(&self) -> Result<String> {
		Ok(serde_json::to_string_pretty(self)?)
	}
}

fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}
