//! The [`Command`] capability and the [`Outcome`] a command hands back to the dispatcher.

use std::fmt;

use async_trait::async_trait;
use sbot_core::{ChatClient, Event, Result};

/// A deferred action against the chat client. `execute` takes `&self`: running a command
/// never changes it, side effects land on the client or store only.
#[async_trait]
pub trait Command: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }

    /// Performs one platform action. Returning [`Outcome::Next`] asks the dispatcher to run
    /// another command with the same event.
    async fn execute(&self, client: &dyn ChatClient, event: Option<&Event>) -> Result<Outcome>;
}

/// Result of one command execution.
pub enum Outcome {
    /// Nothing to report.
    Done,
    /// Terminal value returned to the dispatcher's caller.
    Value(String),
    /// Run this command next.
    Next(Box<dyn Command>),
}

impl Outcome {
    pub fn next(command: impl Command + 'static) -> Self {
        Outcome::Next(Box::new(command))
    }

    pub fn value(value: impl Into<String>) -> Self {
        Outcome::Value(value.into())
    }
}

impl fmt::Debug for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Done => f.write_str("Done"),
            Outcome::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Outcome::Next(cmd) => f.debug_tuple("Next").field(&cmd.name()).finish(),
        }
    }
}
