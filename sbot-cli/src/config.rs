use anyhow::Result;
use std::env;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://./sbot_history.db";
pub const DEFAULT_LOG_FILE: &str = "logs/sbot.log";

/// Local settings, loaded from DATABASE_URL and LOG_FILE. Slack settings live in
/// [`sbot_slack::SlackConfig`] and are only loaded when a command talks to Slack.
pub struct AppConfig {
    pub database_url: String,
    pub log_file: String,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());

        Ok(Self {
            database_url,
            log_file,
        })
    }
}
