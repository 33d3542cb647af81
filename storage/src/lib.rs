//! Storage crate: message history persistence.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – MessageRecord, HistoryQuery
//! - [`history_store`] – HistoryStore trait
//! - [`message_repo`] – MessageRepository (SQLite)
//! - [`sqlite_pool`] – SqlitePoolManager

mod error;
mod history_store;
mod message_repo;
mod models;
mod sqlite_pool;


pub use error::StorageError;
pub use history_store::HistoryStore;
pub use message_repo::MessageRepository;
pub use models::{HistoryQuery, MessageRecord};
pub use sqlite_pool::SqlitePoolManager;
