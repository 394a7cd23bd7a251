//! HMAC-SHA256 signing primitives.
//!
//! Hosted payment page requests are signed over
//! `name1:...:nameN:value1:...:valueN` with every value escaped; notifications
//! are signed over their values alone, joined by `:`. The key is configured as
//! hex and decoded on every call so a malformed key surfaces as an error at the
//! point of use.

use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::AdyenError;
use crate::security::constant_time_eq;

type HmacSha256 = Hmac<Sha256>;

/// One `(name, value)` pair of a signing string, value not yet escaped.
pub type SigningField = (&'static str, String);

/// Escape `\` as `\\` and `:` as `\:` so a value cannot break the
/// colon-delimited signing string.
pub fn escape_special_chars(value: &str) -> String {
    value.replace('\\', "\\\\").replace(':', "\\:")
}

/// Build the hosted payment page signing string from fields in their
/// required order.
pub fn signing_string(fields: &[SigningField]) -> String {
    let names = fields.iter().map(|(name, _)| *name);
    let values = fields.iter().map(|(_, value)| escape_special_chars(value));
    names
        .map(str::to_string)
        .chain(values)
        .collect::<Vec<_>>()
        .join(":")
}

/// Build the notification signing string: values only, unescaped.
pub fn values_string(values: &[&str]) -> String {
    values.join(":")
}

/// Compute the base64 HMAC-SHA256 of `data` under the hex-encoded key.
pub fn compute_signature(hex_key: &str, data: &str) -> Result<String, AdyenError> {
    let key = hex::decode(hex_key)?;
    let mut mac =
        HmacSha256::new_from_slice(&key).map_err(|e| AdyenError::Hmac(e.to_string()))?;
    mac.update(data.as_bytes());
    Ok(base64::engine::general_purpose::STANDARD.encode(mac.finalize().into_bytes()))
}

/// Recompute the signature of `data` and compare it with `supplied`.
///
/// A mismatch is `Ok(false)`; only key or hashing problems are errors.
pub fn verify_signature(hex_key: &str, data: &str, supplied: &str) -> Result<bool, AdyenError> {
    let expected = compute_signature(hex_key, data)?;
    Ok(constant_time_eq(expected.as_bytes(), supplied.as_bytes()))
}
