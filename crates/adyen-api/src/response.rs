//! Decoding of API responses, including Adyen's error documents.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::AdyenError;

/// Error document returned by the API for a rejected call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[error("[{error_type}][{status}]: ({error_code}) {message}")]
pub struct ApiError {
    pub error_type: String,
    pub error_code: String,
    pub message: String,
    pub status: i32,
}

/// Inspect a response body for an API error.
///
/// An error document whose `status` is above 299 becomes [`AdyenError::Api`],
/// whatever the HTTP status said. An empty body, or a failed HTTP status
/// without an error document, becomes [`AdyenError::Http`].
pub fn check_response(status: u16, body: &[u8]) -> Result<(), AdyenError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AdyenError::Http(format!(
            "empty response body (status {status})"
        )));
    }

    if let Ok(api) = serde_json::from_slice::<ApiError>(body) {
        if api.status > 299 {
            return Err(AdyenError::Api(api));
        }
    }

    if status > 299 {
        return Err(AdyenError::Http(format!(
            "unexpected status {status}: {}",
            String::from_utf8_lossy(body)
        )));
    }

    Ok(())
}

/// [`check_response`], then decode the body as `T`.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T, AdyenError> {
    check_response(status, body)?;
    Ok(serde_json::from_slice(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modification::ModificationResponse;

    #[test]
    fn test_error_document_with_ok_status() {
        let body = br#"{
            "errorType" : "authorise",
            "errorCode" : "501",
            "message"   : "sample error",
            "status"    : 501
        }"#;
        let err = check_response(200, body).unwrap_err();
        match err {
            AdyenError::Api(api) => {
                assert_eq!(api.to_string(), "[authorise][501]: (501) sample error")
            }
            other => panic!("expected api error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_body_is_an_error() {
        assert!(matches!(
            check_response(503, b""),
            Err(AdyenError::Http(_))
        ));
    }

    #[test]
    fn test_failed_status_without_document() {
        assert!(matches!(
            check_response(502, b"<html>bad gateway</html>"),
            Err(AdyenError::Http(_))
        ));
    }

    #[test]
    fn test_decode_success_body() {
        let resp: ModificationResponse = decode_response(
            200,
            br#"{"pspReference":"8413547924770610","response":"[capture-received]"}"#,
        )
        .unwrap();
        assert_eq!(resp.response, "[capture-received]");
    }

    #[test]
    fn test_decode_invalid_json() {
        let result: Result<ModificationResponse, _> = decode_response(200, b"not json");
        assert!(matches!(result, Err(AdyenError::Serde(_))));
    }
}
