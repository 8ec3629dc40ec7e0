//! Export-time document naming.
//!
//! Default names are derived when they are needed and are never written back
//! into [`AppState`]. A stored default would be indistinguishable from a
//! deliberately chosen title on the next load.

use easel_primitives::{Clock, SystemClock, format_timestamp};
use tracing::trace;

use crate::app_state::AppState;

/// Prefix of generated default names.
pub const DEFAULT_NAME_PREFIX: &str = "Untitled";

/// Name to export `state` under: its title if set, else
/// `Untitled-YYYY-MM-DD-HHMM` at the current instant of `clock`.
pub fn resolve_export_name(state: &AppState, clock: &dyn Clock) -> String {
	DefaultNamer::new(clock).resolve(state)
}

/// Derives export names with a configurable prefix.
#[derive(Debug, Clone)]
pub struct DefaultNamer<C = SystemClock> {
	prefix: String,
	clock: C,
}

impl Default for DefaultNamer<SystemClock> {
	fn default() -> Self {
		Self::new(SystemClock)
	}
}

impl<C: Clock> DefaultNamer<C> {
	pub fn new(clock: C) -> Self {
		Self {
			prefix: DEFAULT_NAME_PREFIX.to_owned(),
			clock,
		}
	}

	pub fn with_prefix(self, prefix: impl Into<String>) -> Self {
		Self {
			prefix: prefix.into(),
			..self
		}
	}

	pub fn prefix(&self) -> &str {
		&self.prefix
	}

	/// Export name for `state`.
	pub fn resolve(&self, state: &AppState) -> String {
		match state.name.as_named() {
			Some(name) => name.to_owned(),
			None => {
				let name = self.default_name();
				trace!(name = %name, "derived default document name");
				name
			}
		}
	}

	/// A fresh default name for the current instant.
	pub fn default_name(&self) -> String {
		format!("{}-{}", self.prefix, format_timestamp(&self.clock.now()))
	}
}
