use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::telegram::endpoint::DEFAULT_BASE_URL;

/// Top-level configuration (from config.toml + CLI args)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub bot: BotConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Bot API host; point at a local server for testing
    pub base_url: String,
    /// Per-request deadline covering connect, upload and response
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout_secs: 60,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    pub token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
            file: None,
        }
    }
}

impl Config {
    /// Load config from default path (~/.config/tgbot/config.toml)
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tgbot")
            .join("config.toml")
    }

    /// Bot token, in order: explicit value, `TELEGRAM_BOT_TOKEN`, config file
    pub fn resolve_token(&self, explicit: Option<String>) -> Result<String> {
        explicit
            .or_else(|| std::env::var("TELEGRAM_BOT_TOKEN").ok())
            .or_else(|| self.bot.token.clone())
            .filter(|token| !token.trim().is_empty())
            .context("no bot token: pass --token, set TELEGRAM_BOT_TOKEN, or add [bot] token to config.toml")
    }
}
