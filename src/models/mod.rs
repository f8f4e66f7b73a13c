//! Data models for keycodes, menus, keyboard capabilities and panes.
//!
//! Models are plain data and independent of the catalog and codec logic.

pub mod capabilities;
pub mod keycode;
pub mod pane;

// Re-export all model types
pub use capabilities::{CustomKeycode, KeyboardCapabilities, KeycodeModule, LightingKeycodes};
pub use keycode::{Keycode, KeycodeKind, KeycodeMenu, MenuWidth};
pub use pane::{pane_by_key, pane_for_path, panes, Pane, PANES};
