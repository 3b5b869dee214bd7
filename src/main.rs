use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use tgbot::cli::{self, upload::MediaKind};
use tgbot::config::Config;
use tgbot::logging;
use tgbot::telegram::{SendMediaOptions, SendMessageOptions};

#[derive(Parser)]
#[command(name = "tgbot", version, about = "Telegram Bot API from the command line")]
struct Cli {
    /// Bot token (defaults to TELEGRAM_BOT_TOKEN, then config.toml)
    #[arg(long, global = true)]
    token: Option<String>,

    /// Config file (defaults to ~/.config/tgbot/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the token and show the bot's identity
    Me,
    /// Send a text message
    Send {
        /// Chat id or @channelusername
        chat: String,
        text: String,
        /// Deliver without sound
        #[arg(long)]
        silent: bool,
        /// Disable link previews
        #[arg(long)]
        no_preview: bool,
        /// Reply to this message id
        #[arg(long, default_value_t = 0)]
        reply_to: i64,
        /// Raw JSON reply markup
        #[arg(long, default_value = "")]
        markup: String,
    },
    /// Send a photo (local path, URL, or file id with --file-id)
    Photo {
        chat: String,
        source: String,
        #[arg(short, long, default_value = "")]
        caption: String,
        #[arg(long)]
        silent: bool,
        /// Treat SOURCE as a file id already stored on Telegram
        #[arg(long)]
        file_id: bool,
    },
    /// Send a document (local path, URL, or file id with --file-id)
    Document {
        chat: String,
        source: String,
        #[arg(short, long, default_value = "")]
        caption: String,
        #[arg(long)]
        silent: bool,
        /// Treat SOURCE as a file id already stored on Telegram
        #[arg(long)]
        file_id: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_default(),
    };

    let _ = logging::init(&config.logging.level, config.logging.file.as_deref());

    match cli.command {
        Commands::Me => cli::me::run(&config, cli.token).await,
        Commands::Send {
            chat,
            text,
            silent,
            no_preview,
            reply_to,
            markup,
        } => {
            let opts = SendMessageOptions {
                disable_web_page_preview: no_preview,
                disable_notification: silent,
                reply_to_message_id: reply_to,
                reply_markup: markup,
            };
            cli::send::run(&config, cli.token, &chat, &text, &opts).await
        }
        Commands::Photo {
            chat,
            source,
            caption,
            silent,
            file_id,
        } => {
            let file = cli::upload::input_file(&source, file_id)?;
            let opts = media_options(caption, silent);
            cli::upload::run(&config, cli.token, MediaKind::Photo, &chat, &file, &opts).await
        }
        Commands::Document {
            chat,
            source,
            caption,
            silent,
            file_id,
        } => {
            let file = cli::upload::input_file(&source, file_id)?;
            let opts = media_options(caption, silent);
            cli::upload::run(&config, cli.token, MediaKind::Document, &chat, &file, &opts).await
        }
    }
}

fn media_options(caption: String, silent: bool) -> SendMediaOptions {
    SendMediaOptions {
        caption,
        disable_notification: silent,
        ..Default::default()
    }
}
