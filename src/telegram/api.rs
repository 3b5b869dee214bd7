use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use super::endpoint::Endpoint;
use super::envelope;
use super::error::{Error, Result};
use super::file::InputFile;
use super::options::{OptionBag, Params, SendMediaOptions, SendMessageOptions};
use super::request;
use super::transport::{HttpTransport, Transport};
use super::types::{ChatAction, ChatId, Message, User};
use crate::config::ApiConfig;

/// A validated Bot API client.
///
/// Only produced once `getMe` has succeeded for the token; the identity it
/// returned is cached for the lifetime of the value. A successful `getMe`
/// that carries no result leaves the identity absent.
#[derive(Clone)]
pub struct Bot {
    token: String,
    endpoint: Endpoint,
    transport: Arc<dyn Transport>,
    me: Option<User>,
}

impl std::fmt::Debug for Bot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bot")
            .field("endpoint", &self.endpoint)
            .field("me", &self.me)
            .finish_non_exhaustive()
    }
}

impl Bot {
    /// Connect over HTTP using the given API settings
    pub async fn new(token: impl Into<String>, config: &ApiConfig) -> Result<Self> {
        let transport = HttpTransport::new(Duration::from_secs(config.timeout_secs))?;
        Self::with_transport(token, Endpoint::new(&config.base_url), Arc::new(transport)).await
    }

    /// Connect over an arbitrary transport. Fails if the `getMe` check fails.
    pub async fn with_transport(
        token: impl Into<String>,
        endpoint: Endpoint,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        let token = token.into();
        let me = fetch_me(&token, &endpoint, transport.as_ref()).await?;
        match me {
            Some(ref me) => {
                tracing::debug!(bot_id = me.id, username = ?me.username, "Bot API token validated")
            }
            None => tracing::debug!("Bot API token validated, getMe returned no identity"),
        }
        Ok(Self {
            token,
            endpoint,
            transport,
            me,
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Identity fetched at construction
    pub fn me(&self) -> Option<&User> {
        self.me.as_ref()
    }

    /// Call a method with a JSON payload (`None` for parameterless methods)
    pub async fn call_json<T, P>(&self, method: &str, payload: Option<&P>) -> Result<T>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let spec = request::encode_json(&self.endpoint, method, &self.token, payload)?;
        tracing::debug!(method, "calling Bot API");
        let response = self.transport.send(spec).await?;
        envelope::decode(&response.body)
    }

    /// Call a method uploading the local file at `path` as form field `field`
    pub async fn call_multipart<T: DeserializeOwned>(
        &self,
        method: &str,
        field: &str,
        path: &Path,
        params: Params,
    ) -> Result<T> {
        let spec =
            request::encode_multipart(&self.endpoint, method, &self.token, field, path, params)
                .await?;
        tracing::debug!(method, file = %path.display(), "uploading to Bot API");
        let response = self.transport.send(spec).await?;
        if response.is_server_error() {
            return Err(Error::ServerFault {
                status: response.status,
            });
        }
        envelope::decode(&response.body)
    }

    /// Re-run the token check; returns basic information about the bot
    pub async fn get_me(&self) -> Result<Option<User>> {
        fetch_me(&self.token, &self.endpoint, self.transport.as_ref()).await
    }

    pub async fn send_message(
        &self,
        chat_id: impl Into<ChatId>,
        text: &str,
        opts: Option<&SendMessageOptions>,
    ) -> Result<Option<Message>> {
        let mut params = Params::new();
        params.insert("chat_id".into(), chat_id.into().to_string());
        params.insert("text".into(), text.to_string());
        if let Some(opts) = opts {
            opts.add_to(&mut params);
        }
        self.call_json("sendMessage", Some(&params)).await
    }

    pub async fn send_photo(
        &self,
        chat_id: impl Into<ChatId>,
        photo: &InputFile,
        opts: Option<&SendMediaOptions>,
    ) -> Result<Option<Message>> {
        self.send_media("sendPhoto", "photo", chat_id.into(), photo, opts)
            .await
    }

    pub async fn send_document(
        &self,
        chat_id: impl Into<ChatId>,
        document: &InputFile,
        opts: Option<&SendMediaOptions>,
    ) -> Result<Option<Message>> {
        self.send_media("sendDocument", "document", chat_id.into(), document, opts)
            .await
    }

    pub async fn send_chat_action(
        &self,
        chat_id: impl Into<ChatId>,
        action: ChatAction,
    ) -> Result<bool> {
        let mut params = Params::new();
        params.insert("chat_id".into(), chat_id.into().to_string());
        params.insert("action".into(), action.as_str().to_string());
        let done: Option<bool> = self.call_json("sendChatAction", Some(&params)).await?;
        Ok(done.unwrap_or_default())
    }

    /// Local paths go up as multipart; file ids and URLs ride in a JSON body
    async fn send_media(
        &self,
        method: &str,
        field: &str,
        chat_id: ChatId,
        file: &InputFile,
        opts: Option<&SendMediaOptions>,
    ) -> Result<Option<Message>> {
        let mut params = Params::new();
        params.insert("chat_id".into(), chat_id.to_string());
        if let Some(opts) = opts {
            opts.add_to(&mut params);
        }

        match file {
            InputFile::ByLocalPath(path) => self.call_multipart(method, field, path, params).await,
            remote => {
                params.extend(
                    remote
                        .remote_ref()
                        .map(|reference| (field.to_string(), reference.to_string())),
                );
                self.call_json(method, Some(&params)).await
            }
        }
    }
}

async fn fetch_me(
    token: &str,
    endpoint: &Endpoint,
    transport: &dyn Transport,
) -> Result<Option<User>> {
    let spec = request::encode_json::<Params>(endpoint, "getMe", token, None)?;
    tracing::debug!(method = "getMe", "calling Bot API");
    let response = transport.send(spec).await?;
    envelope::decode(&response.body)
}
