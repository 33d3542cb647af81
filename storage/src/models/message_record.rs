//! Message record model for persistence.
//!
//! Maps to the `messages` table and is used by MessageRepository.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct MessageRecord {
    pub id: String,
    pub channel: String,
    pub user: String,
    pub text: String,
    pub time: DateTime<Utc>,
}

impl MessageRecord {
    /// Creates a new record with a generated UUID and current timestamp.
    pub fn new(channel: String, user: String, text: String) -> Self {
        Self::at(channel, user, text, Utc::now())
    }

    /// Creates a new record with a generated UUID at the given time.
    pub fn at(channel: String, user: String, text: String, time: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            channel,
            user,
            text,
            time,
        }
    }
}
