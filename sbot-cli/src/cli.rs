//! CLI parser and the mapping from subcommands to commands.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use command_chain::{
    parsing, Command, DeleteCommand, HistoryCommand, MessageCommand, Outcome, ReactCommand,
    UploadCommand,
};
use sbot_core::{Event, Record};
use storage::{HistoryStore, MessageRecord};

#[derive(Parser)]
#[command(name = "sbot")]
#[command(about = "Slack bot CLI: send, delete, react, upload, read history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Slack bot token; overrides SLACK_BOT_TOKEN.
    #[arg(short, long, global = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Send a message to a channel, or to a user's DM when no channel is given.
    Send {
        #[arg(short, long)]
        channel: Option<String>,
        #[arg(short, long)]
        user: Option<String>,
        text: String,
    },
    /// Send a chat-style line: the first word names the channel, the rest is the message.
    Say { line: String },
    /// Delete a message.
    Delete {
        #[arg(short, long)]
        channel: String,
        #[arg(short, long)]
        user: String,
        #[arg(long)]
        ts: String,
    },
    /// React to a message with an emoji (`tada` or `:tada:`).
    React {
        #[arg(short, long)]
        channel: String,
        #[arg(long)]
        ts: String,
        emoji: String,
    },
    /// Upload a local file to a channel or a user's DM.
    Upload {
        #[arg(short, long)]
        channel: Option<String>,
        #[arg(short, long)]
        user: Option<String>,
        /// Remove the local file once the upload succeeded.
        #[arg(long)]
        delete: bool,
        file: PathBuf,
    },
    /// Print stored history, optionally posting it to a channel instead.
    History {
        #[arg(short, long)]
        channel: Option<String>,
        #[arg(short, long)]
        user: Option<String>,
        #[arg(long)]
        post_to: Option<String>,
    },
    /// Append a message to the local history store.
    Record {
        #[arg(short, long)]
        channel: String,
        #[arg(short, long)]
        user: String,
        text: String,
    },
}

/// What a subcommand turns into.
pub enum Action {
    Dispatch {
        command: Box<dyn Command>,
        event: Option<Event>,
    },
    Record(MessageRecord),
}

impl Action {
    fn dispatch(command: impl Command + 'static, event: Option<Event>) -> Self {
        Action::Dispatch {
            command: Box::new(command),
            event,
        }
    }
}

/// One line per record: `time #channel <user> text`.
pub fn format_history(records: &[Record]) -> String {
    records
        .iter()
        .map(|r| {
            format!(
                "{} #{} <{}> {}",
                r.time.format("%Y-%m-%d %H:%M:%S"),
                r.channel,
                r.user,
                r.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn action_for(command: Commands, store: Arc<dyn HistoryStore>) -> Result<Action> {
    let action = match command {
        Commands::Send {
            channel,
            user,
            text,
        } => Action::dispatch(MessageCommand::new(channel, user, text), None),
        Commands::Say { line } => {
            let (head, tail) = parsing::split_head_tail(&line);
            let Some(channel) = parsing::parse_channel_name(head) else {
                bail!("'{}' is not a channel name", head);
            };
            Action::dispatch(MessageCommand::to_channel(channel, tail), None)
        }
        Commands::Delete { channel, user, ts } => {
            Action::dispatch(DeleteCommand::new(), Some(Event::new(channel, user, ts)))
        }
        Commands::React { channel, ts, emoji } => {
            let name = parsing::emoji_name(parsing::parse_emoji(&emoji).unwrap_or(&emoji));
            let event = Event {
                channel: Some(channel),
                ts: Some(ts),
                ..Default::default()
            };
            Action::dispatch(ReactCommand::new(name), Some(event))
        }
        Commands::Upload {
            channel,
            user,
            delete,
            file,
        } => Action::dispatch(UploadCommand::new(user, channel, file, delete), None),
        Commands::History {
            channel,
            user,
            post_to,
        } => {
            let mut history = HistoryCommand::new(store, move |records| {
                let post_to = post_to.clone();
                async move {
                    let text = format_history(&records);
                    Ok(match post_to {
                        Some(channel) => Outcome::next(MessageCommand::to_channel(channel, text)),
                        None => Outcome::Value(text),
                    })
                }
            });
            if let Some(channel) = channel {
                history = history.channel(channel);
            }
            if let Some(user) = user {
                history = history.user(user);
            }
            Action::dispatch(history, None)
        }
        Commands::Record {
            channel,
            user,
            text,
        } => Action::Record(MessageRecord::new(channel, user, text)),
    };
    Ok(action)
}
