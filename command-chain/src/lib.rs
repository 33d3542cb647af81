//! # Command chain
//!
//! Commands are deferred actions against a [`sbot_core::ChatClient`]: send a message, delete
//! one, fetch history, react, upload a file. A command may hand back another command; the
//! [`Dispatcher`] keeps running the returned commands until one ends the chain.

mod command;
mod delete;
mod dispatcher;
mod history;
mod message;
pub mod parsing;
mod react;
mod upload;

pub use command::{Command, Outcome};
pub use delete::DeleteCommand;
pub use dispatcher::Dispatcher;
pub use history::HistoryCommand;
pub use message::{chunk_text, MessageCommand, MAX_MESSAGE_CHARS};
pub use react::ReactCommand;
pub use upload::UploadCommand;

// Cross-command and dispatcher tests live in tests/
