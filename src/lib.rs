//! Keycat Library
//!
//! This library provides the keycode layer of a VIA-style keyboard
//! configurator: the keycode catalog, key cap label helpers, conversion
//! between string keycodes and protocol bytes, and per-keyboard filtering.

// Module declarations
pub mod cli;
pub mod codec;
pub mod config;
pub mod constants;
pub mod keycode_db;
pub mod models;
pub mod parser;
