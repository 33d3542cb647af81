//! [`HistoryCommand`]: query the history store and hand the records to a callback.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;
use sbot_core::{ChatClient, Event, Record, Result, SbotError};
use storage::{HistoryQuery, HistoryStore, MessageRecord};
use tracing::{error, info};

use crate::command::{Command, Outcome};

type CallbackFuture = Pin<Box<dyn Future<Output = Result<Outcome>> + Send>>;
type Callback = Box<dyn Fn(Vec<Record>) -> CallbackFuture + Send + Sync>;

/// Fetches history filtered by channel and/or user and returns whatever the callback
/// returns, so the callback decides what runs next.
pub struct HistoryCommand {
    store: Arc<dyn HistoryStore>,
    callback: Callback,
    channel: Option<String>,
    user: Option<String>,
}

impl HistoryCommand {
    pub fn new<F, Fut>(store: Arc<dyn HistoryStore>, callback: F) -> Self
    where
        F: Fn(Vec<Record>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Outcome>> + Send + 'static,
    {
        Self {
            store,
            callback: Box::new(move |records| Box::pin(callback(records))),
            channel: None,
            user: None,
        }
    }

    /// Only messages from this channel. An empty string does not filter.
    pub fn channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    /// Only messages from this user. An empty string does not filter.
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// The store filter this command queries with.
    pub fn query(&self) -> HistoryQuery {
        HistoryQuery {
            channel: self.channel.clone().filter(|c| !c.is_empty()),
            user: self.user.clone().filter(|u| !u.is_empty()),
            limit: None,
        }
    }
}

impl fmt::Debug for HistoryCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryCommand")
            .field("channel", &self.channel)
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}

fn to_record(row: MessageRecord) -> Record {
    Record::new(row.channel, row.user, row.text, row.time)
}

#[async_trait]
impl Command for HistoryCommand {
    fn name(&self) -> &'static str {
        "HistoryCommand"
    }

    async fn execute(&self, _client: &dyn ChatClient, _event: Option<&Event>) -> Result<Outcome> {
        let query = self.query();
        let rows = self.store.query(&query).await.map_err(|e| {
            error!(error = %e, "History query failed");
            SbotError::Database(e.to_string())
        })?;

        let records: Vec<Record> = rows.into_iter().map(to_record).collect();
        info!(
            channel = ?query.channel,
            user = ?query.user,
            records = records.len(),
            "History fetched, invoking callback"
        );

        (self.callback)(records).await
    }
}
