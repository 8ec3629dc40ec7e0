use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use parking_lot::Mutex;

use super::Clock;

/// Test clock with an optional pinned instant.
///
/// While an override is set, [`Clock::now`] returns it; once cleared the
/// clock falls back to the wall clock.
#[derive(Debug, Default)]
pub struct ManualClock {
	pinned: Mutex<Option<DateTime<Local>>>,
}

impl ManualClock {
	/// Clock without an override.
	pub fn new() -> Self {
		Self::default()
	}

	/// Clock pinned at `instant`.
	pub fn fixed(instant: DateTime<Local>) -> Self {
		Self {
			pinned: Mutex::new(Some(instant)),
		}
	}

	/// Clock pinned at a local wall-clock reading.
	///
	/// # Panics
	///
	/// Panics if `local` does not exist in the host time zone (DST gap).
	pub fn at_local(local: NaiveDateTime) -> Self {
		Self::fixed(local_instant(local))
	}

	/// Sets (`Some`) or clears (`None`) the override.
	pub fn set_override(&self, instant: Option<DateTime<Local>>) {
		*self.pinned.lock() = instant;
	}

	/// Pins the clock at a local wall-clock reading.
	pub fn set_local(&self, local: NaiveDateTime) {
		self.set_override(Some(local_instant(local)));
	}

	pub fn is_overridden(&self) -> bool {
		self.pinned.lock().is_some()
	}
}

impl Clock for ManualClock {
	fn now(&self) -> DateTime<Local> {
		let pinned = *self.pinned.lock();
		pinned.unwrap_or_else(Local::now)
	}
}

fn local_instant(local: NaiveDateTime) -> DateTime<Local> {
	Local
		.from_local_datetime(&local)
		.earliest()
		.expect("local time should exist in the host time zone")
}
