//! # sbot-core
//!
//! Core types and traits for the Slack bot: [`ChatClient`], [`Event`], [`Record`], error
//! types and tracing initialization. Transport-agnostic; used by command-chain and sbot-slack.

pub mod client;
pub mod error;
pub mod logger;
pub mod types;

pub use client::ChatClient;
pub use error::{CommandError, Result, SbotError};
pub use logger::init_tracing;
pub use types::{Event, Record};
