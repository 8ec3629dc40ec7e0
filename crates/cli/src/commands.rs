use std::path::Path;

use anyhow::Context;
use easel_config::Config;
use easel_input::is_command_palette_toggle_raw;
use easel_primitives::{Clock, RawModifiers, SystemClock, timestamp_now};
use easel_state::{AppState, reconcile_with};
use tracing::debug;

use crate::Command;

pub(crate) fn run(command: &Command, config: &Config) -> anyhow::Result<String> {
	run_with_clock(command, config, &SystemClock)
}

pub(crate) fn run_with_clock(command: &Command, config: &Config, clock: &dyn Clock) -> anyhow::Result<String> {
	match command {
		Command::Reconcile { local, imported } => {
			let local = read_state(local)?;
			let imported = imported.as_deref().map(read_state).transpose()?;
			let state = reconcile_with(imported.as_ref(), &local, &config.reconcile_policy());
			Ok(state.to_json_pretty()?)
		}
		Command::Name { state } => {
			let state = read_state(state)?;
			Ok(config.namer(clock).resolve(&state))
		}
		Command::Timestamp => Ok(timestamp_now(clock)),
		Command::Shortcut {
			key,
			ctrl,
			meta,
			alt,
			shift,
		} => {
			let raw = RawModifiers {
				ctrl: *ctrl,
				meta: *meta,
				alt: *alt,
				shift: *shift,
			};
			let platform = config.platform();
			debug!(?platform, ?raw, key = %key, "classifying key press");
			Ok(is_command_palette_toggle_raw(key, raw, platform).to_string())
		}
	}
}

fn read_state(path: &Path) -> anyhow::Result<AppState> {
	let content = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
	AppState::from_json(&content).with_context(|| format!("decoding state {}", path.display()))
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use chrono::NaiveDate;
	use clap::Parser;
	use easel_primitives::ManualClock;

	use super::*;
	use crate::{Args, load_config};

	fn write(dir: &Path, file: &str, content: &str) -> PathBuf {
		let path = dir.join(file);
		std::fs::write(&path, content).unwrap();
		path
	}

	fn clock() -> ManualClock {
		let instant = NaiveDate::from_ymd_opt(2024, 11, 21).and_then(|d| d.and_hms_opt(14, 30, 0)).unwrap();
		ManualClock::at_local(instant)
	}

	#[test]
	fn reconcile_without_import_drops_local_name() {
		let dir = tempfile::tempdir().unwrap();
		let local = write(dir.path(), "local.json", r#"{"name":"Untitled-2024-01-12-0935","zoom":1}"#);
		let command = Command::Reconcile { local, imported: None };

		let out = run_with_clock(&command, &Config::default(), &clock()).unwrap();
		let state = AppState::from_json(&out).unwrap();
		assert!(state.name.is_unset());
		assert_eq!(state.field("zoom").and_then(|v| v.as_i64()), Some(1));
	}

	#[test]
	fn name_falls_back_to_timestamp() {
		let dir = tempfile::tempdir().unwrap();
		let path = write(dir.path(), "state.json", r#"{"name":null}"#);
		let out = run_with_clock(&Command::Name { state: path }, &Config::default(), &clock()).unwrap();
		assert_eq!(out, "Untitled-2024-11-21-1430");
	}

	#[test]
	fn name_reports_bad_state_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = write(dir.path(), "state.json", "[]");
		let err = run_with_clock(&Command::Name { state: path }, &Config::default(), &clock()).unwrap_err();
		assert!(format!("{err:#}").contains("must be a JSON object"), "{err:#}");
	}

	#[test]
	fn timestamp_uses_clock() {
		let out = run_with_clock(&Command::Timestamp, &Config::default(), &clock()).unwrap();
		assert_eq!(out, "2024-11-21-1430");
	}

	#[test]
	fn shortcut_respects_configured_platform() {
		let config = Config::parse("[input]\nplatform = \"other\"\n").unwrap();
		let args = Args::try_parse_from(["easel", "shortcut", "--key", "P", "--ctrl", "--shift"]).unwrap();
		assert_eq!(run_with_clock(&args.command, &config, &clock()).unwrap(), "true");

		let args = Args::try_parse_from(["easel", "shortcut", "--key", "/", "--ctrl", "--alt"]).unwrap();
		assert_eq!(run_with_clock(&args.command, &config, &clock()).unwrap(), "false");
	}

	#[test]
	fn parses_global_flags_after_subcommand() {
		let args = Args::try_parse_from(["easel", "timestamp", "--verbose", "--config", "easel.toml"]).unwrap();
		assert!(args.verbose);
		assert_eq!(args.config, [PathBuf::from("easel.toml")]);
	}

	#[test]
	fn layered_configs_merge_in_order() {
		let dir = tempfile::tempdir().unwrap();
		let base = write(dir.path(), "base.toml", "[naming]\nprefix = \"Drawing\"\n[reconcile]\nidentity-fields = [\"fileHandle\"]\n");
		let user = write(dir.path(), "user.toml", "[naming]\nprefix = \"Sketch\"\n");
		let (base, user) = (base.to_str().unwrap(), user.to_str().unwrap());
		let args = Args::try_parse_from(["easel", "timestamp", "-c", base, "-c", user]).unwrap();

		let config = load_config(&args.config).unwrap();
		assert_eq!(config.name_prefix(), "Sketch");
		assert_eq!(config.reconcile.identity_fields, ["fileHandle"]);

		let state = write(dir.path(), "state.json", r#"{"name":null}"#);
		let out = run_with_clock(&Command::Name { state }, &config, &clock()).unwrap();
		assert_eq!(out, "Sketch-2024-11-21-1430");
	}

	#[test]
	fn missing_layer_is_reported() {
		let dir = tempfile::tempdir().unwrap();
		let err = load_config(&[dir.path().join("absent.toml")]).unwrap_err();
		assert!(format!("{err:#}").contains("loading config"), "{err:#}");
	}
}
