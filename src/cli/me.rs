use anyhow::Result;
use colored::Colorize;

use crate::config::Config;

/// Print the identity behind the configured token
pub async fn run(config: &Config, token: Option<String>) -> Result<()> {
    let bot = super::connect(config, token).await?;
    let Some(me) = bot.me() else {
        eprintln!("{} token accepted, but getMe returned no identity", "⚠".yellow());
        return Ok(());
    };

    println!("{} {}", "✓".green(), me.first_name.bold());
    println!("  id:       {}", me.id);
    if let Some(ref username) = me.username {
        println!("  username: @{username}");
    }
    println!("  is_bot:   {}", me.is_bot);
    if let Some(groups) = me.can_join_groups {
        println!("  can_join_groups: {groups}");
    }
    if let Some(all) = me.can_read_all_group_messages {
        println!("  can_read_all_group_messages: {all}");
    }
    if let Some(inline) = me.supports_inline_queries {
        println!("  supports_inline_queries: {inline}");
    }
    Ok(())
}
