//! CLI command handlers for keycat.
//!
//! This module provides headless, scriptable access to the keycode catalog
//! and converter for automation, testing, and CI/CD integration.

pub mod common;
pub mod config;
pub mod decode;
pub mod encode;
pub mod keycodes;
pub mod label;
pub mod menus;
pub mod other;
pub mod panes;
pub mod short_name;

// Re-export types used by main.rs and tests
pub use common::{CliContext, CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use decode::DecodeArgs;
pub use encode::EncodeArgs;
pub use keycodes::KeycodesArgs;
pub use label::LabelArgs;
pub use menus::MenusArgs;
pub use other::OtherArgs;
pub use panes::PanesArgs;
pub use short_name::ShortNameArgs;
