//! helpdesk-bot: entry point. Loads `.env`, parses the CLI, and runs the bot or a one-off ask.

use anyhow::Result;
use clap::Parser;
use dbot_telegram::TelegramConfig;
use helpdesk_bot::{ask, run_bot, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = TelegramConfig::load(token)?;
            run_bot(config).await
        }
        Commands::Ask {
            text,
            name,
            bot_username,
        } => {
            let action = ask(&text, &name, bot_username.as_deref());
            println!("{}", serde_json::to_string_pretty(&action)?);
            Ok(())
        }
    }
}
