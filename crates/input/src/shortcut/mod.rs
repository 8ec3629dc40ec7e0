//! Command palette toggle gesture.
//!
//! The palette opens on `primary+shift+p` (either letter case) or
//! `primary+/`. Holding Alt vetoes both.

use easel_primitives::{KeyEvent, Platform, RawModifiers};
use tracing::trace;

const PALETTE_LETTER: &str = "p";
const PALETTE_SLASH: &str = "/";

/// Returns true if `event` toggles the command palette.
pub fn is_command_palette_toggle(event: &KeyEvent) -> bool {
	let mods = event.modifiers;
	let hit = !mods.alt && mods.primary && ((mods.shift && event.key_eq_ignore_case(PALETTE_LETTER)) || event.key == PALETTE_SLASH);
	if hit {
		trace!(key = %event, "command palette toggle");
	}
	hit
}

/// Like [`is_command_palette_toggle`], for hosts holding unresolved Ctrl/Meta flags.
pub fn is_command_palette_toggle_raw(key: &str, raw: RawModifiers, platform: Platform) -> bool {
	is_command_palette_toggle(&KeyEvent::new(key, raw.resolve(platform)))
}
