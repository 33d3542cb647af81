//! Response shapes for the Slack Web API methods the client calls.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct Conversation {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ResponseMetadata {
    #[serde(default)]
    pub next_cursor: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ConversationsList {
    pub channels: Vec<Conversation>,
    #[serde(default)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ConversationsOpen {
    pub channel: Conversation,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UploadUrl {
    pub upload_url: String,
    pub file_id: String,
}

/// For methods whose payload beyond `ok` is not needed.
#[derive(Debug, Deserialize)]
pub(crate) struct Empty {}
