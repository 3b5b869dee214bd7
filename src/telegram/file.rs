use std::path::PathBuf;

use super::error::{Error, Result};

/// A file to attach to a send call. Exactly one source per value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputFile {
    /// A file already stored on Telegram's servers
    ById(String),
    /// An HTTP URL for Telegram to fetch
    ByUrl(String),
    /// A local file, uploaded as multipart form data
    ByLocalPath(PathBuf),
}

impl InputFile {
    pub fn by_id(file_id: impl Into<String>) -> Result<Self> {
        let file_id = file_id.into();
        if file_id.trim().is_empty() {
            return Err(Error::InvalidFile("empty file id".into()));
        }
        Ok(Self::ById(file_id))
    }

    pub fn by_url(url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(Error::InvalidFile("empty URL".into()));
        }
        Ok(Self::ByUrl(url))
    }

    pub fn by_local_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(Error::InvalidFile("empty path".into()));
        }
        Ok(Self::ByLocalPath(path))
    }

    pub fn is_on_disk(&self) -> bool {
        matches!(self, Self::ByLocalPath(_))
    }

    /// Value sent in a JSON request for remote files. `None` for local paths.
    pub fn remote_ref(&self) -> Option<&str> {
        match self {
            Self::ById(id) => Some(id),
            Self::ByUrl(url) => Some(url),
            Self::ByLocalPath(_) => None,
        }
    }
}
