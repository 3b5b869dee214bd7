use anyhow::Result;
use colored::Colorize;

use crate::config::Config;
use crate::telegram::SendMessageOptions;

/// Send a text message and report the new message id
pub async fn run(
    config: &Config,
    token: Option<String>,
    chat: &str,
    text: &str,
    opts: &SendMessageOptions,
) -> Result<()> {
    let bot = super::connect(config, token).await?;
    match bot.send_message(chat, text, Some(opts)).await? {
        Some(sent) => {
            eprintln!(
                "{} sent message {} to chat {}",
                "✓".green(),
                sent.message_id,
                sent.chat.id
            );
            println!("{}", sent.message_id);
        }
        None => eprintln!("{} accepted, no message returned", "✓".green()),
    }
    Ok(())
}
