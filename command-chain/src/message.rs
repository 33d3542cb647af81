//! [`MessageCommand`]: send text to a channel or a user's DM, split into platform-sized chunks.

use async_trait::async_trait;
use sbot_core::{ChatClient, CommandError, Event, Result};
use tracing::{debug, info};

use crate::command::{Command, Outcome};

/// Largest message the platform accepts, in characters.
pub const MAX_MESSAGE_CHARS: usize = 4000;

/// Sends `text` to `channel`, or to the DM with `user` when `channel` is unset or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageCommand {
    channel: Option<String>,
    user: Option<String>,
    text: String,
}

impl MessageCommand {
    pub fn new(channel: Option<String>, user: Option<String>, text: impl Into<String>) -> Self {
        Self {
            channel,
            user,
            text: text.into(),
        }
    }

    pub fn to_channel(channel: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(Some(channel.into()), None, text)
    }

    pub fn to_user(user: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(None, Some(user.into()), text)
    }

    pub fn channel(&self) -> Option<&str> {
        self.channel.as_deref()
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    async fn destination(&self, client: &dyn ChatClient) -> Result<String> {
        match (non_empty(&self.channel), non_empty(&self.user)) {
            (Some(channel), _) => client.channel_id(channel).await,
            (None, Some(user)) => client.dm_id(user).await,
            (None, None) => Err(CommandError::NoDestination.into()),
        }
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Splits `text` into consecutive pieces of at most `max_chars` characters. Empty text
/// yields one empty piece. Never splits inside a character.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<&str> {
    debug_assert!(max_chars > 0);

    let mut chunks = Vec::with_capacity(text.len() / max_chars.max(1) + 1);
    let mut start = 0;
    let mut count = 0;
    for (idx, _) in text.char_indices() {
        if count == max_chars {
            chunks.push(&text[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }
    chunks.push(&text[start..]);
    chunks
}

#[async_trait]
impl Command for MessageCommand {
    fn name(&self) -> &'static str {
        "MessageCommand"
    }

    async fn execute(&self, client: &dyn ChatClient, _event: Option<&Event>) -> Result<Outcome> {
        let destination = self.destination(client).await?;
        let chunks = chunk_text(&self.text, MAX_MESSAGE_CHARS);

        info!(
            destination = %destination,
            chunks = chunks.len(),
            text_len = self.text.len(),
            "Sending message"
        );

        // One chunk at a time; the channel must see them in order.
        for (index, chunk) in chunks.iter().enumerate() {
            debug!(index, chunk_len = chunk.len(), "Sending chunk");
            client.send(chunk, &destination).await?;
        }

        Ok(Outcome::Done)
    }
}
