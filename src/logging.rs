use anyhow::{Context, Result};
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Overrides the configured level when set, e.g. `TGBOT_LOG=tgbot=trace`
pub const LOG_ENV: &str = "TGBOT_LOG";

/// `level` applies to this crate only; dependencies (reqwest, hyper) stay at warn
pub fn default_directives(level: &str) -> String {
    format!("warn,tgbot={level}")
}

fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directives(level)))
}

/// Log to stderr; with `log_file`, also append plain-text lines to that file
pub fn init(level: &str, log_file: Option<&Path>) -> Result<()> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let file_layer = match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            Some(fmt::layer().with_writer(file).with_ansi(false))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter(level))
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("installing tracing subscriber")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_scoped_to_crate() {
        assert_eq!(default_directives("debug"), "warn,tgbot=debug");
        assert!(EnvFilter::try_new(default_directives("info")).is_ok());
    }
}
