//! Core types: the triggering [`Event`] and the historical [`Record`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CommandError, Result};

/// Context of the message a command responds to. Every field is optional; commands that
/// need one fail with [`CommandError::MissingEventField`] when it is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub channel: Option<String>,
    pub user: Option<String>,
    /// Platform timestamp identifying the message (Slack `ts`).
    pub ts: Option<String>,
    pub text: Option<String>,
}

impl Event {
    pub fn new(
        channel: impl Into<String>,
        user: impl Into<String>,
        ts: impl Into<String>,
    ) -> Self {
        Self {
            channel: Some(channel.into()),
            user: Some(user.into()),
            ts: Some(ts.into()),
            text: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn channel(&self) -> Result<&str> {
        required(&self.channel, "channel")
    }

    pub fn user(&self) -> Result<&str> {
        required(&self.user, "user")
    }

    pub fn ts(&self) -> Result<&str> {
        required(&self.ts, "ts")
    }
}

fn required<'a>(field: &'a Option<String>, name: &'static str) -> Result<&'a str> {
    field
        .as_deref()
        .ok_or_else(|| CommandError::MissingEventField(name).into())
}

/// One historical message as handed to history callbacks. Built from store rows and never
/// changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub channel: String,
    pub user: String,
    pub text: String,
    pub time: DateTime<Utc>,
}

impl Record {
    pub fn new(
        channel: impl Into<String>,
        user: impl Into<String>,
        text: impl Into<String>,
        time: DateTime<Utc>,
    ) -> Self {
        Self {
            channel: channel.into(),
            user: user.into(),
            text: text.into(),
            time,
        }
    }
}
