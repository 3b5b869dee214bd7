use serde::Serialize;
use std::path::Path;

use super::endpoint::Endpoint;
use super::error::{Error, Result};
use super::options::Params;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingMode {
    Json,
    Multipart,
}

/// A ready-to-send Bot API request
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub url: String,
    /// Bot API method name, kept separately so the token-bearing URL never
    /// has to be logged
    pub method: String,
    pub body: RequestBody,
}

#[derive(Debug, Clone)]
pub enum RequestBody {
    /// Encoded JSON document (`null` for parameterless methods)
    Json(Vec<u8>),
    Multipart(MultipartForm),
}

/// One file part plus plain string fields
#[derive(Debug, Clone)]
pub struct MultipartForm {
    pub file_field: String,
    pub file_name: String,
    pub mime_type: String,
    pub file_bytes: Vec<u8>,
    pub fields: Params,
}

impl RequestSpec {
    pub fn mode(&self) -> EncodingMode {
        match self.body {
            RequestBody::Json(_) => EncodingMode::Json,
            RequestBody::Multipart(_) => EncodingMode::Multipart,
        }
    }
}

/// Build a JSON request. `None` is sent as a literal `null` body.
pub fn encode_json<P: Serialize + ?Sized>(
    endpoint: &Endpoint,
    method: &str,
    token: &str,
    payload: Option<&P>,
) -> Result<RequestSpec> {
    let body = serde_json::to_vec(&payload).map_err(Error::Encode)?;
    Ok(RequestSpec {
        url: endpoint.method_url(token, method),
        method: method.to_string(),
        body: RequestBody::Json(body),
    })
}

/// Build a multipart request uploading the file at `path` under `field`.
///
/// The file is read here, before any network activity, so a missing or
/// unreadable file surfaces as [`Error::LocalIo`].
pub async fn encode_multipart(
    endpoint: &Endpoint,
    method: &str,
    token: &str,
    field: &str,
    path: &Path,
    params: Params,
) -> Result<RequestSpec> {
    let file_bytes = tokio::fs::read(path).await.map_err(|source| Error::LocalIo {
        path: path.to_path_buf(),
        source,
    })?;
    let file_name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    let mime_type = mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string();

    Ok(RequestSpec {
        url: endpoint.method_url(token, method),
        method: method.to_string(),
        body: RequestBody::Multipart(MultipartForm {
            file_field: field.to_string(),
            file_name,
            mime_type,
            file_bytes,
            fields: params,
        }),
    })
}
