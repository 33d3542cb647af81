//! Message repository: persistence and queries for the history log.
//!
//! Uses SqlitePoolManager and the models (MessageRecord, HistoryQuery).
//! External: SQLite via sqlx; callers use save/query/count.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::error::StorageError;
use crate::history_store::HistoryStore;
use crate::models::{HistoryQuery, MessageRecord};
use crate::sqlite_pool::SqlitePoolManager;

#[derive(Clone)]
pub struct MessageRepository {
    pool_manager: SqlitePoolManager,
}

impl MessageRepository {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    async fn init(&self) -> Result<(), StorageError> {
        info!("Creating history tables if not exist");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS messages (
                id TEXT PRIMARY KEY,
                channel TEXT NOT NULL,
                user TEXT NOT NULL,
                text TEXT NOT NULL,
                time TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_messages_channel ON messages(channel)")
            .execute(pool)
            .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_messages_user ON messages(user)")
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Appends a message to the log.
    pub async fn save(&self, message: &MessageRecord) -> Result<(), StorageError> {
        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            INSERT INTO messages (id, channel, user, text, time)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&message.id)
        .bind(&message.channel)
        .bind(&message.user)
        .bind(&message.text)
        .bind(message.time)
        .execute(pool)
        .await?;

        debug!(
            id = %message.id,
            channel = %message.channel,
            user = %message.user,
            "Saved message"
        );
        Ok(())
    }

    pub async fn count(&self) -> Result<i64, StorageError> {
        let pool = self.pool_manager.pool();
        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM messages")
            .fetch_one(pool)
            .await?;
        Ok(total.0)
    }

    pub async fn get_message_by_id(
        &self,
        message_id: &str,
    ) -> Result<Option<MessageRecord>, StorageError> {
        let pool = self.pool_manager.pool();

        let message = sqlx::query_as::<_, MessageRecord>(
            "SELECT id, channel, user, text, time FROM messages WHERE id = ?",
        )
        .bind(message_id)
        .fetch_optional(pool)
        .await?;

        Ok(message)
    }
}

#[async_trait]
impl HistoryStore for MessageRepository {
    async fn query(&self, query: &HistoryQuery) -> Result<Vec<MessageRecord>, StorageError> {
        let pool = self.pool_manager.pool();
        let mut sql = String::from("SELECT id, channel, user, text, time FROM messages WHERE 1=1");
        let mut params: Vec<&str> = Vec::new();

        if let Some(channel) = query.channel.as_deref() {
            sql.push_str(" AND channel = ?");
            params.push(channel);
        }

        if let Some(user) = query.user.as_deref() {
            sql.push_str(" AND user = ?");
            params.push(user);
        }

        // Insertion order is store order.
        sql.push_str(" ORDER BY rowid ASC");

        if let Some(limit) = query.limit {
            sql.push_str(&format!(" LIMIT {}", limit));
        }

        let mut query_builder = sqlx::query_as::<_, MessageRecord>(&sql);
        for param in params {
            query_builder = query_builder.bind(param);
        }

        let messages: Vec<MessageRecord> = query_builder.fetch_all(pool).await?;
        info!(
            channel = ?query.channel,
            user = ?query.user,
            "Retrieved {} messages",
            messages.len()
        );

        Ok(messages)
    }
}
