use async_trait::async_trait;

use crate::error::StorageError;
use crate::models::{HistoryQuery, MessageRecord};

/// Queryable log of past messages.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Returns the messages matching `query` in store order (oldest first).
    async fn query(&self, query: &HistoryQuery) -> Result<Vec<MessageRecord>, StorageError>;
}
