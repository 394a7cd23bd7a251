//! Authorisation requests and the shared shopper/card structures.

use serde::{Deserialize, Serialize};

use crate::amount::Amount;

/// Card details sent in the clear (PCI-scoped integrations only).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Card {
    pub number: String,
    pub expiry_month: String,
    pub expiry_year: String,
    pub cvc: String,
    pub holder_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub city: String,
    pub country: String,
    pub house_number_or_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub postal_code: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state_or_province: String,
    pub street: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Name {
    pub first_name: String,
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub infix: String,
    pub last_name: String,
}

/// Client-side encrypted card blob.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalData {
    #[serde(rename = "card.encrypted.json")]
    pub content: String,
}

/// Shopper browser details, required for 3-D Secure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserInfo {
    pub accept_header: String,
    pub user_agent: String,
}

/// Contract for storing payment details: [`crate::ONECLICK`] or
/// [`crate::RECURRING`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recurring {
    pub contract: String,
}

/// Authorisation with a plain card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Authorise {
    pub card: Card,
    pub amount: Amount,
    pub reference: String,
    pub merchant_account: String,
    /// Mandatory for recurring payments.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub shopper_reference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring: Option<Recurring>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser_info: Option<BrowserInfo>,
}

/// Authorisation with a client-side encrypted card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthoriseEncrypted {
    pub additional_data: AdditionalData,
    pub amount: Amount,
    pub reference: String,
    pub merchant_account: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub shopper_reference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring: Option<Recurring>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser_info: Option<BrowserInfo>,
}

/// Completes an authorisation after the shopper returns from 3-D Secure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Authorise3D {
    pub md: String,
    pub merchant_account: String,
    pub browser_info: BrowserInfo,
    pub pa_response: String,
    #[serde(rename = "shopperIP", default, skip_serializing_if = "String::is_empty")]
    pub shopper_ip: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthoriseResponse {
    #[serde(default)]
    pub psp_reference: String,
    #[serde(default)]
    pub result_code: String,
    #[serde(default)]
    pub auth_code: String,
    #[serde(default)]
    pub refusal_reason: String,
    #[serde(default)]
    pub issuer_url: String,
    #[serde(default)]
    pub md: String,
    #[serde(default)]
    pub pa_request: String,
}
