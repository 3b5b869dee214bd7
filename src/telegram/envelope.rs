use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::error::{Error, Result};
use super::types::ResponseParameters;

/// Substituted when a rejection arrives without a description
pub const MISSING_DESCRIPTION: &str = "no description provided";

/// The `{ok, result, description}` wrapper every Bot API method responds with.
///
/// `result` stays opaque until `ok` is known, so a rejection never fails on
/// the shape of a result it does not carry.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub ok: bool,
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub error_code: Option<i64>,
    #[serde(default)]
    pub parameters: Option<ResponseParameters>,
}

impl ApiResponse {
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(Error::Malformed)
    }

    /// Typed result or the rejection this envelope carries.
    ///
    /// An `ok` envelope without a result decodes as JSON `null`: fine for
    /// `Option<_>` and `()`, [`Error::Malformed`] for anything else.
    pub fn into_result<T: DeserializeOwned>(self) -> Result<T> {
        if !self.ok {
            return Err(Error::Rejected {
                description: self
                    .description
                    .unwrap_or_else(|| MISSING_DESCRIPTION.to_string()),
                error_code: self.error_code,
                parameters: self.parameters,
            });
        }
        let result = self.result.unwrap_or(serde_json::Value::Null);
        serde_json::from_value(result).map_err(Error::Malformed)
    }
}

/// Decode raw response bytes into the caller's expected result type
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    ApiResponse::parse(bytes)?.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_bool_result() {
        let ok: bool = decode(br#"{"ok":true,"result":true}"#).unwrap();
        assert!(ok);
    }

    #[test]
    fn test_rejection_ignores_result_shape() {
        let err = decode::<bool>(br#"{"ok":false,"result":{"x":1},"description":"Bad Request"}"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "Bad Request");
    }

    #[test]
    fn test_missing_description_placeholder() {
        let err = decode::<bool>(br#"{"ok":false}"#).unwrap_err();
        assert_eq!(err.description(), Some(MISSING_DESCRIPTION));
    }

    #[test]
    fn test_missing_result_optional() {
        let value: Option<bool> = decode(br#"{"ok":true}"#).unwrap();
        assert_eq!(value, None);
        let value: Option<bool> = decode(br#"{"ok":true,"result":null}"#).unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn test_missing_result_required() {
        let err = decode::<bool>(br#"{"ok":true}"#).unwrap_err();
        assert!(matches!(err, Error::Malformed(_)));
    }

    #[test]
    fn test_missing_ok_is_malformed() {
        let err = decode::<bool>(br#"{"result":true}"#).unwrap_err();
        assert!(matches!(err, Error::Malformed(_)));
    }

    #[test]
    fn test_rejection_parameters() {
        let err = decode::<bool>(
            br#"{"ok":false,"error_code":429,"description":"Too Many Requests: retry after 3","parameters":{"retry_after":3}}"#,
        )
        .unwrap_err();
        assert!(err.is_retryable());
        match err {
            Error::Rejected {
                error_code,
                parameters,
                ..
            } => {
                assert_eq!(error_code, Some(429));
                assert_eq!(parameters.and_then(|p| p.retry_after), Some(3));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
