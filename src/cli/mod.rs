pub mod me;
pub mod send;
pub mod upload;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::telegram::Bot;

/// Resolve the token and connect; fails unless `getMe` succeeds
pub async fn connect(config: &Config, token: Option<String>) -> Result<Bot> {
    let token = config.resolve_token(token)?;
    Bot::new(token, &config.api)
        .await
        .context("connecting to the Bot API")
}
