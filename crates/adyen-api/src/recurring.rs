//! Stored ("recurring") payment details of a shopper.

use serde::{Deserialize, Serialize};

use crate::payment::{Card, Recurring};

/// List the stored payment details of a shopper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringDetailsRequest {
    pub merchant_account: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub shopper_reference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring: Option<Recurring>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringDetailsResult {
    #[serde(default)]
    pub creation_date: String,
    #[serde(default)]
    pub details: Vec<RecurringDetailWrapper>,
    #[serde(default)]
    pub invalid_oneclick_contracts: String,
    #[serde(default)]
    pub shopper_reference: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringDetailWrapper {
    #[serde(rename = "RecurringDetail")]
    pub recurring_detail: RecurringDetail,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringDetailAdditionalData {
    #[serde(default)]
    pub card_bin: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecurringDetail {
    pub acquirer: String,
    pub acquirer_account: String,
    pub additional_data: RecurringDetailAdditionalData,
    pub alias: String,
    pub alias_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    pub contract_types: Vec<String>,
    pub creation_date: String,
    pub first_psp_reference: String,
    pub payment_method_variant: String,
    pub recurring_detail_reference: String,
    pub variant: String,
}

/// Disable stored details. Without `recurring_detail_reference` every stored
/// method of the shopper is disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringDisableRequest {
    pub merchant_account: String,
    pub shopper_reference: String,
    /// `ONECLICK`, `RECURRING`, `PAYOUT` or a comma-separated combination.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub contract: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub recurring_detail_reference: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringDisableResponse {
    #[serde(default)]
    pub response: String,
}
