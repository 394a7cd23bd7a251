use thiserror::Error;

use crate::response::ApiError;

/// Errors returned by Adyen operations.
#[derive(Debug, Error)]
pub enum AdyenError {
    #[error("config error: {0}")]
    Config(String),

    #[error("notification carries no HMAC signature")]
    MissingSignature,

    #[error("no HMAC key configured")]
    MissingHmacKey,

    #[error("HMAC key is not valid hex: {0}")]
    InvalidHmacKey(#[from] hex::FromHexError),

    #[error("hmac error: {0}")]
    Hmac(String),

    #[error("api error: {0}")]
    Api(ApiError),

    #[error("http error: {0}")]
    Http(String),

    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl AdyenError {
    /// True for the inbound precondition failures, where validation could not
    /// even be attempted.
    pub fn is_precondition(&self) -> bool {
        matches!(self, AdyenError::MissingSignature | AdyenError::MissingHmacKey)
    }
}
