//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and version information.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Keycat";

/// The binary name of the application (used in command examples and the config directory).
pub const APP_BINARY_NAME: &str = "keycat";

/// Version string baked in at compile time.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
