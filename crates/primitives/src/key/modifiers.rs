//! Key modifier types (primary, Alt, Shift).

use super::Platform;

/// Modifiers as seen by shortcut predicates.
///
/// Ctrl and Cmd are already collapsed into [`Modifiers::primary`] for the
/// running platform; see [`RawModifiers::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
	/// Whether the platform command modifier (Ctrl, or Cmd on Apple) is held.
	pub primary: bool,
	/// Whether Alt (Option) is held.
	pub alt: bool,
	/// Whether Shift is held.
	pub shift: bool,
}

impl Modifiers {
	/// No modifiers pressed.
	pub const NONE: Self = Self {
		primary: false,
		alt: false,
		shift: false,
	};

	/// Only the primary modifier pressed.
	pub const PRIMARY: Self = Self {
		primary: true,
		alt: false,
		shift: false,
	};

	/// Only Alt pressed.
	pub const ALT: Self = Self {
		primary: false,
		alt: true,
		shift: false,
	};

	/// Only Shift pressed.
	pub const SHIFT: Self = Self {
		primary: false,
		alt: false,
		shift: true,
	};

	/// Returns a copy with the primary modifier added.
	pub fn primary(self) -> Self {
		Self { primary: true, ..self }
	}

	/// Returns a copy with Alt added.
	pub fn alt(self) -> Self {
		Self { alt: true, ..self }
	}

	/// Returns a copy with Shift added.
	pub fn shift(self) -> Self {
		Self { shift: true, ..self }
	}

	/// Returns true if no modifiers are set.
	pub fn is_empty(self) -> bool {
		!self.primary && !self.alt && !self.shift
	}
}

/// Modifier flags exactly as a windowing layer reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RawModifiers {
	pub ctrl: bool,
	pub meta: bool,
	pub alt: bool,
	pub shift: bool,
}

impl RawModifiers {
	/// Collapses Ctrl/Meta into a single primary flag for `platform`.
	///
	/// On Apple platforms only Meta (Cmd) counts as primary; elsewhere only
	/// Ctrl does.
	pub fn resolve(self, platform: Platform) -> Modifiers {
		let primary = match platform {
			Platform::Apple => self.meta,
			Platform::Other => self.ctrl,
		};
		Modifiers {
			primary,
			alt: self.alt,
			shift: self.shift,
		}
	}
}
