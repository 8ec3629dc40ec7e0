//! Merging an imported document state with the local session state.
//!
//! Fields fall in two classes:
//!
//! - **Session fields** (zoom, scroll, tool, ...): the local session is the
//!   baseline, and an imported document overrides every key it carries,
//!   including explicit `null`s. Keys absent from the import keep the local
//!   value.
//! - **Identity fields** (the title, plus any keys named by
//!   [`ReconcilePolicy::identity_fields`]): taken from the imported document
//!   when it carries a meaningful value, otherwise cleared. They never fall
//!   through to the local session, whose values may belong to an unrelated
//!   document.
//!
//! In particular a fresh session (`imported == None`) always starts with an
//! unset title, so export later derives a current default name instead of
//! reusing whatever title was persisted last.

use serde_json::Value;
use tracing::{debug, trace};

use crate::app_state::{AppState, NAME_KEY};
use crate::name::DocumentName;

/// Which opaque fields follow identity precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcilePolicy {
	identity_fields: Vec<String>,
}

impl ReconcilePolicy {
	/// Policy where only the title is identity-scoped.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds identity-scoped keys. `name` is always identity-scoped and is
	/// ignored here; duplicates are dropped.
	pub fn with_identity_fields<I, S>(mut self, keys: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		for key in keys {
			let key = key.into();
			if key != NAME_KEY && !self.identity_fields.contains(&key) {
				self.identity_fields.push(key);
			}
		}
		self
	}

	pub fn identity_fields(&self) -> &[String] {
		&self.identity_fields
	}

	pub fn is_identity_field(&self, key: &str) -> bool {
		key == NAME_KEY || self.identity_fields.iter().any(|k| k == key)
	}
}

/// Reconciles with the default policy (only the title is identity-scoped).
pub fn reconcile(imported: Option<&AppState>, local: &AppState) -> AppState {
	reconcile_with(imported, local, &ReconcilePolicy::default())
}

/// Reconciles `imported` (present when a document is being opened) against
/// the always-present `local` session state.
pub fn reconcile_with(imported: Option<&AppState>, local: &AppState, policy: &ReconcilePolicy) -> AppState {
	let mut fields = local.fields.clone();
	if let Some(imported) = imported {
		fields.extend(imported.fields.iter().map(|(key, value)| (key.clone(), value.clone())));
	}
	// The title is decided by `reconcile_name` alone; a stray opaque entry
	// would serialize as a second `name` key.
	if fields.remove(NAME_KEY).is_some() {
		debug!("dropped opaque name entry from reconciled fields");
	}

	for key in policy.identity_fields() {
		let supplied = imported.and_then(|state| state.fields.get(key)).filter(|value| is_meaningful(value));
		match supplied {
			Some(value) => {
				fields.insert(key.clone(), value.clone());
			}
			None => {
				if fields.remove(key).is_some() {
					trace!(key = %key, "cleared identity field without imported value");
				}
			}
		}
	}

	AppState {
		name: reconcile_name(imported.map(|state| &state.name), &local.name),
		fields,
	}
}

fn reconcile_name(imported: Option<&DocumentName>, local: &DocumentName) -> DocumentName {
	match imported {
		Some(DocumentName::Named(name)) => {
			trace!(name = %name, "keeping imported document name");
			DocumentName::Named(name.clone())
		}
		Some(other) => {
			debug!(imported = %other, local = %local, "imported document has no name; leaving unset");
			DocumentName::Unset
		}
		None => {
			if local.is_named() {
				debug!(local = %local, "fresh document; not inheriting persisted name");
			}
			DocumentName::Unset
		}
	}
}

/// Whether an identity value actually says something about the document.
fn is_meaningful(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::String(s) => !s.is_empty(),
		Value::Array(items) => !items.is_empty(),
		Value::Object(map) => !map.is_empty(),
		Value::Bool(_) | Value::Number(_) => true,
	}
}
