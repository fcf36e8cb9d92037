//! Minimal framework config: token, API URL, log path.
//! Loaded from environment variables BOT_TOKEN, TELEGRAM_API_URL (or TELOXIDE_API_URL), LOG_FILE.

use anyhow::Result;
use std::env;

/// Log file used when LOG_FILE is not set.
pub const DEFAULT_LOG_FILE: &str = "logs/helpdesk-bot.log";

/// Telegram connection and logging config.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    /// BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// LOG_FILE
    pub log_file: String,
}

impl TelegramConfig {
    /// Loads from the environment. `token` overrides BOT_TOKEN when given.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        let config = Self {
            bot_token,
            telegram_api_url,
            log_file,
        };
        config.validate()?;
        Ok(config)
    }

    /// Builds a config with the given token and defaults for everything else.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            log_file: DEFAULT_LOG_FILE.to_string(),
        }
    }

    /// Rejects an empty token or an API URL that does not parse.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN is empty");
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }
}
