use anyhow::Result;
use colored::Colorize;

use crate::config::Config;
use crate::telegram::{InputFile, SendMediaOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Photo,
    Document,
}

/// `--file-id` → stored file, `http(s)://` → URL, anything else → local upload.
///
/// Local paths are never checked here; a missing file fails while the
/// upload is encoded, before any request goes out.
pub fn input_file(source: &str, file_id: bool) -> crate::telegram::Result<InputFile> {
    if file_id {
        InputFile::by_id(source)
    } else if source.starts_with("http://") || source.starts_with("https://") {
        InputFile::by_url(source)
    } else {
        InputFile::by_local_path(source)
    }
}

/// Send a photo or document and report the new message id
pub async fn run(
    config: &Config,
    token: Option<String>,
    kind: MediaKind,
    chat: &str,
    file: &InputFile,
    opts: &SendMediaOptions,
) -> Result<()> {
    let bot = super::connect(config, token).await?;
    let sent = match kind {
        MediaKind::Photo => bot.send_photo(chat, file, Some(opts)).await?,
        MediaKind::Document => bot.send_document(chat, file, Some(opts)).await?,
    };

    let how = if file.is_on_disk() { "upload" } else { "reference" };
    match sent {
        Some(sent) => {
            eprintln!("{} sent {how} as message {}", "✓".green(), sent.message_id);
            println!("{}", sent.message_id);
        }
        None => eprintln!("{} {how} accepted, no message returned", "✓".green()),
    }
    Ok(())
}
