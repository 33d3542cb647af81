use async_trait::async_trait;
use sbot_core::{ChatClient, CommandError, Event, Result};
use tracing::info;

use crate::command::{Command, Outcome};

/// Reacts with `emoji` to the message the triggering event describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactCommand {
    emoji: String,
}

impl ReactCommand {
    pub fn new(emoji: impl Into<String>) -> Self {
        Self {
            emoji: emoji.into(),
        }
    }

    pub fn emoji(&self) -> &str {
        &self.emoji
    }
}

#[async_trait]
impl Command for ReactCommand {
    fn name(&self) -> &'static str {
        "ReactCommand"
    }

    async fn execute(&self, client: &dyn ChatClient, event: Option<&Event>) -> Result<Outcome> {
        let event = event.ok_or(CommandError::MissingEvent)?;

        info!(emoji = %self.emoji, channel = ?event.channel, ts = ?event.ts, "Adding reaction");
        client.react(&self.emoji, event).await?;

        Ok(Outcome::Done)
    }
}
