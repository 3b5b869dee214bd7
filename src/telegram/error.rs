use std::path::PathBuf;
use thiserror::Error;

use super::types::ResponseParameters;

/// Result type alias for Bot API calls
pub type Result<T> = std::result::Result<T, Error>;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Everything a single Bot API call can fail with.
///
/// Nothing here is retried or logged by the library; each variant goes
/// straight back to the caller of the method that produced it.
#[derive(Error, Debug)]
pub enum Error {
    /// DNS, TCP, TLS or timeout failure talking to the API host
    #[error("Bot API connection failed: {0}")]
    Connection(#[source] BoxError),

    /// Local file for an upload could not be opened or read
    #[error("failed to read {}: {source}", path.display())]
    LocalIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Multipart form could not be assembled
    #[error("failed to build multipart form: {0}")]
    Form(String),

    /// Server-side fault status returned for a file upload
    #[error("Bot API server fault: HTTP {status}")]
    ServerFault { status: u16 },

    /// Body was not a valid `{ok, result, description}` envelope
    #[error("malformed Bot API response: {0}")]
    Malformed(#[source] serde_json::Error),

    /// Envelope parsed with `ok: false`
    #[error("{description}")]
    Rejected {
        description: String,
        error_code: Option<i64>,
        parameters: Option<ResponseParameters>,
    },

    /// Request payload could not be serialized
    #[error("failed to encode request payload: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("invalid file reference: {0}")]
    InvalidFile(String),
}

impl Error {
    /// Whether repeating the same call could reasonably succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Connection(_) | Self::ServerFault { .. } => true,
            Self::Rejected { parameters, .. } => parameters
                .as_ref()
                .is_some_and(|p| p.retry_after.is_some()),
            _ => false,
        }
    }

    /// Remote-supplied description, for `Rejected` only
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Rejected { description, .. } => Some(description),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        // reqwest embeds the full URL in its Display, and the URL carries the token
        Self::Connection(Box::new(err.without_url()))
    }
}
