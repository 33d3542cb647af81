//! # sbot-cli
//!
//! Argument parsing, config loading and the subcommand → command mapping for the `sbot` binary.

pub mod cli;
pub mod config;

pub use cli::{action_for, format_history, Action, Cli, Commands};
pub use config::AppConfig;
