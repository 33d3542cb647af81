//! # sbot-slack
//!
//! Slack connectivity: [`SlackConfig`] from the environment and [`SlackClient`], the Web API
//! implementation of [`sbot_core::ChatClient`]. No persistence or command logic.

mod api;
mod client;
mod config;

pub use client::{is_conversation_id, SlackClient};
pub use config::{SlackConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
