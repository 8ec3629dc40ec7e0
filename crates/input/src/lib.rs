//! Keyboard shortcut predicates for Easel hosts.

pub mod shortcut;

pub use shortcut::{is_command_palette_toggle, is_command_palette_toggle_raw};
