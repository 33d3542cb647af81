//! Filter for history lookups.
//!
//! Used by [`crate::HistoryStore::query`]; unset fields do not filter.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryQuery {
    pub channel: Option<String>,
    pub user: Option<String>,
    /// Maximum number of rows, oldest first.
    pub limit: Option<i64>,
}

impl HistoryQuery {
    /// Matches every stored message.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}
