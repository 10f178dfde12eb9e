//! `stockwise-cli`
//!
//! **Responsibility:** command-line surface over the reorder engine.
//!
//! Reads stock items from JSON files, runs them through the engine configured by
//! the persisted settings, and prints the results. All state (settings, audit
//! log) lives in a JSON file store under the data directory.

pub mod args;
pub mod commands;
pub mod render;

pub use args::{Cli, Command, ItemsArgs, OutputFormat, SettingsCommand};
pub use commands::run;
