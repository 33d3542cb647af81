use async_trait::async_trait;
use sbot_core::{ChatClient, CommandError, Event, Result};
use tracing::info;

use crate::command::{Command, Outcome};

/// Deletes the message the triggering event describes. Carries no state of its own: the
/// target channel, user and ts come from the event alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteCommand;

impl DeleteCommand {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Command for DeleteCommand {
    fn name(&self) -> &'static str {
        "DeleteCommand"
    }

    async fn execute(&self, client: &dyn ChatClient, event: Option<&Event>) -> Result<Outcome> {
        let event = event.ok_or(CommandError::MissingEvent)?;
        let channel = event.channel()?;
        let user = event.user()?;
        let ts = event.ts()?;

        info!(channel = %channel, user = %user, ts = %ts, "Deleting message");
        client.delete_message(channel, user, ts).await?;

        Ok(Outcome::Done)
    }
}
