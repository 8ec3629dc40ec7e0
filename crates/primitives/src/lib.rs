//! Core types shared across Easel crates: keyboard events and time.

/// Keyboard event and modifier types.
pub mod key;
/// Clock abstraction and timestamp formatting.
pub mod time;

pub use key::{KeyEvent, Modifiers, Platform, RawModifiers};
#[cfg(any(test, feature = "test-support"))]
pub use time::ManualClock;
pub use time::{Clock, SystemClock, format_timestamp, timestamp_now};
