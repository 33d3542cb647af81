//! Chat client abstraction the commands act on.
//!
//! [`ChatClient`] is transport-agnostic; `sbot-slack` implements it over the Slack Web API
//! and tests substitute recording fakes.

use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::Event;

/// Operations a command may ask of the chat platform. Every call is a single request;
/// implementations do not retry.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Resolves a channel name or id to the channel address used by [`ChatClient::send`].
    async fn channel_id(&self, channel: &str) -> Result<String>;
    /// Resolves a user id to the address of the direct-message conversation with that user.
    async fn dm_id(&self, user: &str) -> Result<String>;
    /// Posts one message chunk to an already resolved destination.
    async fn send(&self, text: &str, destination: &str) -> Result<()>;
    /// Deletes the message identified by `ts` in `channel`.
    async fn delete_message(&self, channel: &str, user: &str, ts: &str) -> Result<()>;
    /// Adds a reaction to the message described by `event`.
    async fn react(&self, emoji: &str, event: &Event) -> Result<()>;
    /// Posts a local file into `channel`, or into the DM with `user` when no channel is given.
    async fn upload_file(
        &self,
        file_name: &Path,
        channel: Option<&str>,
        user: Option<&str>,
    ) -> Result<()>;
}
