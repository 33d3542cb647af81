//! Runs a command and every command it chains to, one after another.

use std::sync::Arc;

use sbot_core::{ChatClient, Event, Result};
use tracing::{debug, error, info, instrument};

use crate::command::{Command, Outcome};

/// Executes commands against one client. A command returning [`Outcome::Next`] is followed
/// by the next command in a loop, so chains of any length use constant stack.
#[derive(Clone)]
pub struct Dispatcher {
    client: Arc<dyn ChatClient>,
}

impl Dispatcher {
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Arc<dyn ChatClient> {
        &self.client
    }

    /// Convenience for [`Dispatcher::dispatch`] with a concrete command.
    pub async fn run<C: Command + 'static>(
        &self,
        command: C,
        event: Option<&Event>,
    ) -> Result<Option<String>> {
        self.dispatch(Box::new(command), event).await
    }

    /// Runs `command`, then each command it chains to with the same event. Returns the
    /// final value, or `None` when the chain ends in [`Outcome::Done`]. The first error stops
    /// the chain and is returned as is.
    #[instrument(skip_all)]
    pub async fn dispatch(
        &self,
        command: Box<dyn Command>,
        event: Option<&Event>,
    ) -> Result<Option<String>> {
        let mut current = command;
        let mut step: usize = 0;

        loop {
            step += 1;
            let name = current.name();
            info!(command = %name, step, "step: command executing");

            let outcome = match current.execute(self.client.as_ref(), event).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    error!(command = %name, step, error = %e, "step: command failed");
                    return Err(e);
                }
            };

            match outcome {
                Outcome::Next(next) => {
                    debug!(command = %name, next = %next.name(), "step: command chained");
                    current = next;
                }
                Outcome::Value(value) => {
                    info!(steps = step, value_len = value.len(), "step: dispatch finished with value");
                    return Ok(Some(value));
                }
                Outcome::Done => {
                    info!(steps = step, "step: dispatch finished");
                    return Ok(None);
                }
            }
        }
    }
}
