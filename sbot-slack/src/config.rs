//! Minimal Slack configuration: bot token, API base URL, request timeout.
//! Loaded from SLACK_BOT_TOKEN, SLACK_API_URL and SLACK_TIMEOUT_SECS.

use anyhow::Result;
use std::env;

pub const DEFAULT_API_URL: &str = "https://slack.com/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub struct SlackConfig {
    pub bot_token: String,
    /// Base URL for Web API methods; tests point this at a mock server.
    pub api_url: String,
    pub timeout_secs: u64,
}

impl SlackConfig {
    /// SLACK_BOT_TOKEN is required; SLACK_API_URL and SLACK_TIMEOUT_SECS are optional.
    pub fn from_env() -> Result<Self> {
        Self::load(None)
    }

    /// Like [`SlackConfig::from_env`], but a given `token` replaces SLACK_BOT_TOKEN.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("SLACK_BOT_TOKEN")
                .map_err(|_| anyhow::anyhow!("SLACK_BOT_TOKEN not set"))?,
        };
        let mut config = Self::with_token(bot_token);
        if let Ok(api_url) = env::var("SLACK_API_URL") {
            config.api_url = api_url;
        }
        if let Ok(timeout) = env::var("SLACK_TIMEOUT_SECS") {
            config.timeout_secs = timeout
                .parse()
                .map_err(|_| anyhow::anyhow!("SLACK_TIMEOUT_SECS is not a number: {}", timeout))?;
        }
        Ok(config)
    }

    /// Uses the given token with default URL and timeout.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
