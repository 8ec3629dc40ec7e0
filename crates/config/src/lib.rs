//! Configuration for Easel document handling.
//!
//! Configuration is written in TOML. Every section and key is optional:
//!
//! ```toml
//! [naming]
//! prefix = "Untitled"          # prefix of generated default names
//!
//! [reconcile]
//! identity-fields = []         # extra state keys that are never inherited
//!
//! [input]
//! platform = "auto"            # "auto", "apple" or "other"
//! ```
//!
//! Unknown keys are rejected. Non-fatal issues are collected in
//! [`Config::warnings`].

pub mod error;

use std::path::Path;

use easel_primitives::{Clock, Platform};
use easel_state::{DefaultNamer, NAME_KEY, ReconcilePolicy};
pub use error::{ConfigError, ConfigWarning, Result};
use serde::Deserialize;
use tracing::debug;

/// Parsed configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	pub naming: NamingConfig,
	pub reconcile: ReconcileConfig,
	pub input: InputConfig,
	/// Non-fatal warnings encountered during parsing.
	#[serde(skip)]
	pub warnings: Vec<ConfigWarning>,
}

/// `[naming]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamingConfig {
	/// Prefix for generated names; `None` keeps the built-in `Untitled`.
	pub prefix: Option<String>,
}

/// `[reconcile]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct ReconcileConfig {
	pub identity_fields: Vec<String>,
}

/// `[input]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
	pub platform: PlatformSetting,
}

/// Which modifier counts as primary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformSetting {
	/// Detect from the build target.
	#[default]
	Auto,
	Apple,
	Other,
}

impl PlatformSetting {
	pub fn resolve(self) -> Platform {
		match self {
			Self::Auto => Platform::current(),
			Self::Apple => Platform::Apple,
			Self::Other => Platform::Other,
		}
	}
}

impl Config {
	/// Parse a TOML string into a [`Config`].
	pub fn parse(input: &str) -> Result<Self> {
		let mut config: Config = toml::from_str(input)?;
		config.validate()?;
		Ok(config)
	}

	/// Load configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		let config = Self::parse(&content)?;
		debug!(path = %path.display(), warnings = config.warnings.len(), "loaded config");
		Ok(config)
	}

	/// Merge another config into this one.
	///
	/// Values from `other` override values in `self`; identity fields from
	/// both are kept.
	pub fn merge(&mut self, other: Config) {
		if other.naming.prefix.is_some() {
			self.naming.prefix = other.naming.prefix;
		}
		for key in other.reconcile.identity_fields {
			if !self.reconcile.identity_fields.contains(&key) {
				self.reconcile.identity_fields.push(key);
			}
		}
		if other.input.platform != PlatformSetting::Auto {
			self.input.platform = other.input.platform;
		}
		self.warnings.extend(other.warnings);
	}

	/// Prefix for generated document names.
	pub fn name_prefix(&self) -> &str {
		self.naming.prefix.as_deref().unwrap_or(easel_state::DEFAULT_NAME_PREFIX)
	}

	/// Namer using the configured prefix and `clock`.
	pub fn namer<C: Clock>(&self, clock: C) -> DefaultNamer<C> {
		DefaultNamer::new(clock).with_prefix(self.name_prefix())
	}

	pub fn reconcile_policy(&self) -> ReconcilePolicy {
		ReconcilePolicy::new().with_identity_fields(self.reconcile.identity_fields.iter().cloned())
	}

	pub fn platform(&self) -> Platform {
		self.input.platform.resolve()
	}

	fn validate(&mut self) -> Result<()> {
		if let Some(prefix) = &self.naming.prefix {
			if prefix.trim().is_empty() {
				return Err(ConfigError::InvalidValue {
					field: "naming.prefix",
					reason: "must not be blank".into(),
				});
			}
		}
		for key in &self.reconcile.identity_fields {
			if key.is_empty() {
				return Err(ConfigError::InvalidValue {
					field: "reconcile.identity-fields",
					reason: "keys must not be empty".into(),
				});
			}
			if key == NAME_KEY {
				self.warnings.push(ConfigWarning {
					message: format!("'{NAME_KEY}' in reconcile.identity-fields is always identity-scoped and will be ignored"),
				});
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests;
