use std::io::Write;

use chrono::NaiveDate;
use easel_primitives::ManualClock;
use easel_state::AppState;

use super::*;

const FULL: &str = r#"
[naming]
prefix = "Drawing"

[reconcile]
identity-fields = ["fileHandle", "shareLink"]

[input]
platform = "apple"
"#;

#[test]
fn test_empty_config_uses_defaults() {
	let config = Config::parse("").unwrap();
	assert_eq!(config, Config::default());
	assert_eq!(config.name_prefix(), "Untitled");
	assert!(config.reconcile_policy().identity_fields().is_empty());
	assert_eq!(config.platform(), Platform::current());
}

#[test]
fn test_full_config() {
	let config = Config::parse(FULL).unwrap();
	assert_eq!(config.name_prefix(), "Drawing");
	assert_eq!(config.reconcile_policy().identity_fields(), ["fileHandle".to_string(), "shareLink".to_string()]);
	assert_eq!(config.platform(), Platform::Apple);
	assert!(config.warnings.is_empty());
}

#[test]
fn test_unknown_key_rejected() {
	let err = Config::parse("[naming]\nsuffix = \"x\"\n").unwrap_err();
	assert!(matches!(err, ConfigError::Toml(_)), "{err}");
}

#[test]
fn test_unknown_platform_rejected() {
	let err = Config::parse("[input]\nplatform = \"amiga\"\n").unwrap_err();
	assert!(matches!(err, ConfigError::Toml(_)), "{err}");
}

#[test]
fn test_blank_prefix_rejected() {
	let err = Config::parse("[naming]\nprefix = \"  \"\n").unwrap_err();
	assert!(matches!(err, ConfigError::InvalidValue { field: "naming.prefix", .. }), "{err}");
}

#[test]
fn test_name_identity_field_warns() {
	let config = Config::parse("[reconcile]\nidentity-fields = [\"name\"]\n").unwrap();
	assert_eq!(config.warnings.len(), 1);
	assert!(config.warnings[0].to_string().starts_with("Warning: 'name'"));
	assert!(config.reconcile_policy().identity_fields().is_empty());
}

#[test]
fn test_merge_overrides() {
	let mut base = Config::parse(FULL).unwrap();
	let other = Config::parse("[naming]\nprefix = \"Sketch\"\n[reconcile]\nidentity-fields = [\"shareLink\", \"roomId\"]\n").unwrap();
	base.merge(other);

	assert_eq!(base.name_prefix(), "Sketch");
	assert_eq!(base.reconcile.identity_fields, ["fileHandle", "shareLink", "roomId"]);
	assert_eq!(base.input.platform, PlatformSetting::Apple, "auto does not override");
}

#[test]
fn test_namer_uses_prefix() {
	let config = Config::parse(FULL).unwrap();
	let instant = NaiveDate::from_ymd_opt(2024, 11, 21).and_then(|d| d.and_hms_opt(14, 30, 0)).unwrap();
	let clock = ManualClock::at_local(instant);
	assert_eq!(config.namer(&clock).resolve(&AppState::new()), "Drawing-2024-11-21-1430");
}

#[test]
fn test_load_from_file() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	file.write_all(FULL.as_bytes()).unwrap();
	let config = Config::load(file.path()).unwrap();
	assert_eq!(config.name_prefix(), "Drawing");
}

#[test]
fn test_load_missing_file() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("missing.toml");
	let err = Config::load(&path).unwrap_err();
	match err {
		ConfigError::Io { path: reported, .. } => assert_eq!(reported, path),
		other => panic!("expected I/O error, got {other}"),
	}
}
