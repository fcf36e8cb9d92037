//! CLI for the helpdesk-bot binary. See `main.rs` for dispatch.

use clap::{Parser, Subcommand};

/// Root CLI: holds a single subcommand.
#[derive(Parser, Debug)]
#[command(name = "helpdesk-bot")]
#[command(about = "Telegram helpdesk bot with scripted replies")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        /// Bot token. If omitted, BOT_TOKEN from env is used.
        #[arg(short, long)]
        token: Option<String>,
    },

    /// Route one message offline and print the reply action as JSON. No network.
    Ask {
        /// Message text as the user would type it.
        #[arg(value_name = "TEXT")]
        text: String,

        /// Display name of the sender, used by greeting replies.
        #[arg(short, long, default_value = "there")]
        name: String,

        /// Bot username (without @) to strip when the text starts with a mention of it.
        #[arg(short, long)]
        bot_username: Option<String>,
    },
}
