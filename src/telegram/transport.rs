use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use std::time::Duration;

use super::error::{Error, Result};
use super::request::{MultipartForm, RequestBody, RequestSpec};

/// Status and body of one HTTP exchange, before envelope decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }
}

/// Sends one encoded request and returns the raw response.
///
/// Implementations must not retry; each `send` is exactly one round trip.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: RequestSpec) -> Result<RawResponse>;
}

/// reqwest-backed transport used outside of tests
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: RequestSpec) -> Result<RawResponse> {
        let builder = self.client.post(&request.url);
        let builder = match request.body {
            RequestBody::Json(body) => builder.header(CONTENT_TYPE, "application/json").body(body),
            RequestBody::Multipart(form) => builder.multipart(build_form(form)?),
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        Ok(RawResponse { status, body })
    }
}

fn build_form(form: MultipartForm) -> Result<Form> {
    let part = Part::bytes(form.file_bytes)
        .file_name(form.file_name)
        .mime_str(&form.mime_type)
        .map_err(|e| Error::Form(format!("invalid MIME type {}: {e}", form.mime_type)))?;

    Ok(form
        .fields
        .into_iter()
        .fold(Form::new().part(form.file_field, part), |acc, (key, value)| {
            acc.text(key, value)
        }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telegram::options::Params;

    #[tokio::test]
    async fn test_bad_mime_is_form_error() {
        let transport = HttpTransport::new(Duration::from_secs(1)).unwrap();
        let request = RequestSpec {
            // never contacted: the form fails to build first
            url: "http://127.0.0.1:9/bottoken/sendDocument".into(),
            method: "sendDocument".into(),
            body: RequestBody::Multipart(MultipartForm {
                file_field: "document".into(),
                file_name: "notes.txt".into(),
                mime_type: "no-slash-here".into(),
                file_bytes: b"hello".to_vec(),
                fields: Params::new(),
            }),
        };

        let err = transport.send(request).await.unwrap_err();
        match err {
            Error::Form(reason) => assert!(reason.contains("no-slash-here"), "{reason}"),
            other => panic!("expected form error, got {other}"),
        }
    }

    #[test]
    fn test_server_error_range() {
        let response = |status| RawResponse {
            status,
            body: Vec::new(),
        };
        assert!(response(500).is_server_error());
        assert!(response(503).is_server_error());
        assert!(!response(429).is_server_error());
        assert!(!response(200).is_server_error());
    }
}
