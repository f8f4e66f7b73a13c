//! Parsing for keyboard definition files.
//!
//! This module reads VIA-style keyboard definitions and turns them into the
//! capability descriptors the keycode catalog filters by.

pub mod definition;

// Re-export commonly used functions
pub use definition::{load_capabilities, parse_definition, KeyboardDefinition};
