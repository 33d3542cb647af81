//! [`SlackClient`]: Slack Web API implementation of [`sbot_core::ChatClient`].
//!
//! Every method is a form-encoded POST with the bot token as bearer auth. A response is
//! accepted only when its body says `"ok": true`; anything else becomes [`SbotError::Client`].

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use sbot_core::{ChatClient, CommandError, Event, Result, SbotError};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use crate::api::{ConversationsList, ConversationsOpen, Empty, UploadUrl};
use crate::config::SlackConfig;

const LIST_PAGE_SIZE: &str = "200";

pub struct SlackClient {
    http: reqwest::Client,
    token: String,
    api_url: String,
    /// Channel name → id, filled from conversations.list.
    channels: RwLock<HashMap<String, String>>,
    /// User id → DM channel id.
    dms: RwLock<HashMap<String, String>>,
}

/// Slack conversation ids are upper-case and start with C (public), G (private) or D (DM).
pub fn is_conversation_id(s: &str) -> bool {
    s.len() >= 9
        && matches!(s.as_bytes()[0], b'C' | b'G' | b'D')
        && s.bytes().all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}

fn client_err(method: &str, e: impl std::fmt::Display) -> SbotError {
    SbotError::Client(format!("{}: {}", method, e))
}

impl SlackClient {
    pub fn new(config: &SlackConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SbotError::Config(e.to_string()))?;
        Ok(Self {
            http,
            token: config.bot_token.clone(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
            channels: RwLock::new(HashMap::new()),
            dms: RwLock::new(HashMap::new()),
        })
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, params: &[(&str, String)]) -> Result<T> {
        let url = format!("{}/{}", self.api_url, method);
        debug!(method, "Calling Slack API");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .form(params)
            .send()
            .await
            .map_err(|e| client_err(method, e))?
            .error_for_status()
            .map_err(|e| client_err(method, e))?;

        let body: Value = response.json().await.map_err(|e| client_err(method, e))?;
        if body.get("ok").and_then(Value::as_bool) != Some(true) {
            let error = body
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("unknown_error");
            warn!(method, error, "Slack API returned an error");
            return Err(client_err(method, error));
        }

        serde_json::from_value(body).map_err(|e| client_err(method, e))
    }

    /// Walks every page of conversations.list, caching all names it sees.
    async fn refresh_channels(&self) -> Result<()> {
        let mut cursor = String::new();
        let mut found = HashMap::new();

        loop {
            let mut params = vec![
                ("types", "public_channel,private_channel".to_string()),
                ("exclude_archived", "true".to_string()),
                ("limit", LIST_PAGE_SIZE.to_string()),
            ];
            if !cursor.is_empty() {
                params.push(("cursor", cursor.clone()));
            }

            let page: ConversationsList = self.call("conversations.list", &params).await?;
            for conversation in page.channels {
                if let Some(name) = conversation.name {
                    found.insert(name, conversation.id);
                }
            }

            cursor = page.response_metadata.next_cursor;
            if cursor.is_empty() {
                break;
            }
        }

        info!(channels = found.len(), "Channel list refreshed");
        self.channels.write().await.extend(found);
        Ok(())
    }

    async fn cached_channel(&self, name: &str) -> Option<String> {
        self.channels.read().await.get(name).cloned()
    }

    async fn upload_destination(&self, channel: Option<&str>, user: Option<&str>) -> Result<String> {
        match (channel.filter(|c| !c.is_empty()), user.filter(|u| !u.is_empty())) {
            (Some(channel), _) => self.channel_id(channel).await,
            (None, Some(user)) => self.dm_id(user).await,
            (None, None) => Err(CommandError::NoDestination.into()),
        }
    }
}

#[async_trait]
impl ChatClient for SlackClient {
    async fn channel_id(&self, channel: &str) -> Result<String> {
        let name = channel.trim_start_matches('#');
        if is_conversation_id(name) {
            return Ok(name.to_string());
        }

        if let Some(id) = self.cached_channel(name).await {
            return Ok(id);
        }

        self.refresh_channels().await?;
        self.cached_channel(name)
            .await
            .ok_or_else(|| client_err("conversations.list", format!("channel_not_found: {}", name)))
    }

    async fn dm_id(&self, user: &str) -> Result<String> {
        if let Some(id) = self.dms.read().await.get(user).cloned() {
            return Ok(id);
        }

        let opened: ConversationsOpen = self
            .call("conversations.open", &[("users", user.to_string())])
            .await?;
        let id = opened.channel.id;
        self.dms.write().await.insert(user.to_string(), id.clone());
        Ok(id)
    }

    async fn send(&self, text: &str, destination: &str) -> Result<()> {
        let _: Empty = self
            .call(
                "chat.postMessage",
                &[("channel", destination.to_string()), ("text", text.to_string())],
            )
            .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_message(&self, channel: &str, user: &str, ts: &str) -> Result<()> {
        let channel = self.channel_id(channel).await?;
        let _: Empty = self
            .call("chat.delete", &[("channel", channel), ("ts", ts.to_string())])
            .await?;
        Ok(())
    }

    async fn react(&self, emoji: &str, event: &Event) -> Result<()> {
        let channel = self.channel_id(event.channel()?).await?;
        let _: Empty = self
            .call(
                "reactions.add",
                &[
                    ("channel", channel),
                    ("timestamp", event.ts()?.to_string()),
                    ("name", emoji.trim_matches(':').to_string()),
                ],
            )
            .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn upload_file(
        &self,
        file_name: &Path,
        channel: Option<&str>,
        user: Option<&str>,
    ) -> Result<()> {
        let destination = self.upload_destination(channel, user).await?;
        let bytes = tokio::fs::read(file_name).await?;
        let title = file_name
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        let target: UploadUrl = self
            .call(
                "files.getUploadURLExternal",
                &[("filename", title.clone()), ("length", bytes.len().to_string())],
            )
            .await?;

        self.http
            .post(&target.upload_url)
            .body(bytes)
            .send()
            .await
            .map_err(|e| client_err("upload", e))?
            .error_for_status()
            .map_err(|e| client_err("upload", e))?;

        let files = serde_json::json!([{ "id": target.file_id, "title": title }]).to_string();
        let _: Empty = self
            .call(
                "files.completeUploadExternal",
                &[("files", files), ("channel_id", destination)],
            )
            .await?;

        info!(file_id = %target.file_id, "File uploaded");
        Ok(())
    }
}
