//! Shared fakes for command-chain integration tests: a client that records every call and an
//! in-memory history store.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use sbot_core::{ChatClient, Event, Result, SbotError};
use storage::{HistoryQuery, HistoryStore, MessageRecord, StorageError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ChannelId(String),
    DmId(String),
    Send {
        text: String,
        destination: String,
    },
    Delete {
        channel: String,
        user: String,
        ts: String,
    },
    React {
        emoji: String,
        channel: Option<String>,
        ts: Option<String>,
    },
    Upload {
        file: PathBuf,
        channel: Option<String>,
        user: Option<String>,
    },
}

/// Records calls in order. Lookups answer `CID-<name>` and `DM-<user>`.
#[derive(Default)]
pub struct RecordingClient {
    calls: Mutex<Vec<Call>>,
    pub fail_upload: bool,
    pub fail_delete: bool,
}

impl RecordingClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_upload() -> Self {
        Self {
            fail_upload: true,
            ..Self::default()
        }
    }

    pub fn failing_delete() -> Self {
        Self {
            fail_delete: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn sent(&self) -> Vec<(String, String)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Send { text, destination } => Some((text, destination)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ChatClient for RecordingClient {
    async fn channel_id(&self, channel: &str) -> Result<String> {
        self.record(Call::ChannelId(channel.to_string()));
        Ok(format!("CID-{}", channel))
    }

    async fn dm_id(&self, user: &str) -> Result<String> {
        self.record(Call::DmId(user.to_string()));
        Ok(format!("DM-{}", user))
    }

    async fn send(&self, text: &str, destination: &str) -> Result<()> {
        self.record(Call::Send {
            text: text.to_string(),
            destination: destination.to_string(),
        });
        Ok(())
    }

    async fn delete_message(&self, channel: &str, user: &str, ts: &str) -> Result<()> {
        if self.fail_delete {
            return Err(SbotError::Client("message_not_found".to_string()));
        }
        self.record(Call::Delete {
            channel: channel.to_string(),
            user: user.to_string(),
            ts: ts.to_string(),
        });
        Ok(())
    }

    async fn react(&self, emoji: &str, event: &Event) -> Result<()> {
        self.record(Call::React {
            emoji: emoji.to_string(),
            channel: event.channel.clone(),
            ts: event.ts.clone(),
        });
        Ok(())
    }

    async fn upload_file(
        &self,
        file_name: &Path,
        channel: Option<&str>,
        user: Option<&str>,
    ) -> Result<()> {
        if self.fail_upload {
            return Err(SbotError::Client("upload failed".to_string()));
        }
        self.record(Call::Upload {
            file: file_name.to_path_buf(),
            channel: channel.map(str::to_string),
            user: user.map(str::to_string),
        });
        Ok(())
    }
}

/// History store over a fixed list of rows, filtered the way the SQLite store filters.
pub struct MemoryStore {
    rows: Vec<MessageRecord>,
    pub fail: bool,
}

impl MemoryStore {
    pub fn new(rows: Vec<MessageRecord>) -> Self {
        Self { rows, fail: false }
    }

    pub fn failing() -> Self {
        Self {
            rows: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl HistoryStore for MemoryStore {
    async fn query(
        &self,
        query: &HistoryQuery,
    ) -> std::result::Result<Vec<MessageRecord>, StorageError> {
        if self.fail {
            return Err(StorageError::Database("connection closed".to_string()));
        }
        Ok(self
            .rows
            .iter()
            .filter(|r| query.channel.as_deref().map_or(true, |c| r.channel == c))
            .filter(|r| query.user.as_deref().map_or(true, |u| r.user == u))
            .cloned()
            .collect())
    }
}

/// Five rows over channels C1/C2 and users U1/U2, one minute apart.
pub fn sample_rows() -> Vec<MessageRecord> {
    [
        ("C1", "U1", "first"),
        ("C2", "U1", "second"),
        ("C1", "U2", "third"),
        ("C2", "U2", "fourth"),
        ("C1", "U1", "fifth"),
    ]
    .iter()
    .enumerate()
    .map(|(i, (channel, user, text))| {
        let time = Utc.with_ymd_and_hms(2024, 1, 1, 12, i as u32, 0).unwrap();
        MessageRecord::at(channel.to_string(), user.to_string(), text.to_string(), time)
    })
    .collect()
}

pub fn sample_event() -> Event {
    Event::new("C1", "U1", "1700000000.000100").with_text("hello bot")
}
