//! Easel command-line harness.
//!
//! Runs the document state operations against JSON state files:
//! - `reconcile`: merge an imported state with a local session state
//! - `name`: export name of a state
//! - `timestamp`: current default-name timestamp
//! - `shortcut`: classify a key press as a palette toggle

mod commands;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use easel_config::Config;
use tracing::{debug, warn};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "easel")]
#[command(about = "Document state reconciliation and naming tools")]
struct Args {
	/// Configuration file (TOML); repeat to layer, later files win
	#[arg(short, long, value_name = "PATH", global = true)]
	config: Vec<PathBuf>,

	/// Verbose logging
	#[arg(short, long, global = true)]
	verbose: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Print the reconciled state as JSON
	Reconcile {
		/// Local session state file
		#[arg(long, value_name = "PATH")]
		local: PathBuf,
		/// Imported document state file; omit for a fresh document
		#[arg(long, value_name = "PATH")]
		imported: Option<PathBuf>,
	},
	/// Print the export name of a state file
	Name {
		#[arg(value_name = "PATH")]
		state: PathBuf,
	},
	/// Print the current timestamp (YYYY-MM-DD-HHMM)
	Timestamp,
	/// Report whether a key press toggles the command palette
	Shortcut {
		/// Logical key value, e.g. "p" or "/"
		#[arg(long)]
		key: String,
		#[arg(long)]
		ctrl: bool,
		#[arg(long)]
		meta: bool,
		#[arg(long)]
		alt: bool,
		#[arg(long)]
		shift: bool,
	},
}

fn main() -> anyhow::Result<()> {
	let args = Args::parse();

	let subscriber = tracing_subscriber::fmt()
		.with_max_level(if args.verbose {
			tracing::Level::DEBUG
		} else {
			tracing::Level::INFO
		})
		.with_writer(std::io::stderr)
		.finish();

	tracing::subscriber::set_global_default(subscriber)?;

	let config = load_config(&args.config)?;
	for warning in &config.warnings {
		warn!("{warning}");
	}

	let output = commands::run(&args.command, &config)?;
	debug!(command = args.command.label(), "done");
	println!("{output}");
	Ok(())
}

/// Loads and merges `paths` in order; no paths means built-in defaults.
fn load_config(paths: &[PathBuf]) -> anyhow::Result<Config> {
	let mut config = Config::default();
	for path in paths {
		let layer = Config::load(path).with_context(|| format!("loading config {}", path.display()))?;
		config.merge(layer);
	}
	Ok(config)
}

impl Command {
	fn label(&self) -> &'static str {
		match self {
			Command::Reconcile { .. } => "reconcile",
			Command::Name { .. } => "name",
			Command::Timestamp => "timestamp",
			Command::Shortcut { .. } => "shortcut",
		}
	}
}
