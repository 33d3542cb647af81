//! sbot CLI: run one bot command against Slack, or record history locally. Config from env
//! (.env is loaded first) and optional CLI args.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use command_chain::Dispatcher;
use sbot_cli::{action_for, Action, AppConfig, Cli};
use sbot_core::init_tracing;
use sbot_slack::{SlackClient, SlackConfig};
use storage::{HistoryStore, MessageRepository};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load()?;
    init_tracing(&config.log_file)?;

    let repo = MessageRepository::new(&config.database_url)
        .await
        .with_context(|| format!("Failed to open history database {}", config.database_url))?;
    let store: Arc<dyn HistoryStore> = Arc::new(repo.clone());

    match action_for(cli.command, store)? {
        Action::Record(record) => {
            repo.save(&record).await.context("Failed to record message")?;
            info!(id = %record.id, "Message recorded");
            println!("Recorded message {}", record.id);
        }
        Action::Dispatch { command, event } => {
            let slack = SlackConfig::load(cli.token)?;
            let client = SlackClient::new(&slack)?;
            let dispatcher = Dispatcher::new(Arc::new(client));

            if let Some(value) = dispatcher.dispatch(command, event.as_ref()).await? {
                println!("{}", value);
            }
        }
    }

    Ok(())
}
