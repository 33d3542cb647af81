//! [`UploadCommand`]: post a local file, optionally removing it afterwards.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use sbot_core::{ChatClient, Event, Result};
use tracing::info;

use crate::command::{Command, Outcome};

/// Uploads `file_name` into `channel` (or the DM with `user`). With `delete` set the local
/// file is removed, but only once the upload returned successfully; a failed or cancelled
/// upload leaves the file in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCommand {
    user: Option<String>,
    channel: Option<String>,
    file_name: PathBuf,
    delete: bool,
}

impl UploadCommand {
    pub fn new(
        user: Option<String>,
        channel: Option<String>,
        file_name: impl Into<PathBuf>,
        delete: bool,
    ) -> Self {
        Self {
            user,
            channel,
            file_name: file_name.into(),
            delete,
        }
    }

    pub fn file_name(&self) -> &Path {
        &self.file_name
    }

    pub fn deletes_after_upload(&self) -> bool {
        self.delete
    }
}

#[async_trait]
impl Command for UploadCommand {
    fn name(&self) -> &'static str {
        "UploadCommand"
    }

    async fn execute(&self, client: &dyn ChatClient, _event: Option<&Event>) -> Result<Outcome> {
        info!(
            file = %self.file_name.display(),
            channel = ?self.channel,
            user = ?self.user,
            "Uploading file"
        );
        client
            .upload_file(
                &self.file_name,
                self.channel.as_deref(),
                self.user.as_deref(),
            )
            .await?;

        if self.delete {
            tokio::fs::remove_file(&self.file_name).await?;
            info!(file = %self.file_name.display(), "Removed uploaded file");
        }

        Ok(Outcome::Done)
    }
}
