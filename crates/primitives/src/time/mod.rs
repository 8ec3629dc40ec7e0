//! Wall-clock access and document timestamp rendering.
//!
//! Code that needs "now" takes a [`Clock`] instead of calling
//! [`chrono::Local::now`] directly, so tests can pin the instant without any
//! process-wide state. Production code passes [`SystemClock`].

use chrono::{DateTime, Datelike, Local, Timelike};

/// Source of the current local instant.
pub trait Clock: Send + Sync {
	fn now(&self) -> DateTime<Local>;
}

/// Reads the host's wall clock on every call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
	fn now(&self) -> DateTime<Local> {
		Local::now()
	}
}

impl<C: Clock + ?Sized> Clock for &C {
	fn now(&self) -> DateTime<Local> {
		(**self).now()
	}
}

/// Renders `instant` as `YYYY-MM-DD-HHMM` from its calendar fields.
///
/// Hour is 24-hour. There is no separator between hour and minute. The
/// fixed width only holds for years 0 through 9999: later years print all
/// their digits and negative years carry a leading `-`.
pub fn format_timestamp(instant: &(impl Datelike + Timelike)) -> String {
	format!(
		"{:04}-{:02}-{:02}-{:02}{:02}",
		instant.year(),
		instant.month(),
		instant.day(),
		instant.hour(),
		instant.minute()
	)
}

/// Timestamp for the instant reported by `clock`.
pub fn timestamp_now(clock: &dyn Clock) -> String {
	format_timestamp(&clock.now())
}

#[cfg(any(test, feature = "test-support"))]
mod manual;
#[cfg(any(test, feature = "test-support"))]
pub use manual::ManualClock;
