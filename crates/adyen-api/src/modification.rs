//! Modifications of an existing payment: capture, cancel, refund and friends.

use serde::{Deserialize, Serialize};

use crate::amount::Amount;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capture {
    pub modification_amount: Amount,
    pub reference: String,
    pub merchant_account: String,
    pub original_reference: String,
}

/// Also used for cancel-or-refund.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cancel {
    pub reference: String,
    pub merchant_account: String,
    pub original_reference: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Refund {
    pub modification_amount: Amount,
    pub reference: String,
    pub merchant_account: String,
    pub original_reference: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryUsage {
    /// [`crate::DELAYED_CHARGE`] or [`crate::NO_SHOW`].
    pub industry_usage: String,
}

/// Change the amount of a previous authorisation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustAuthorisation {
    pub modification_amount: Amount,
    pub reference: String,
    pub merchant_account: String,
    pub original_reference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_data: Option<IndustryUsage>,
}

/// Cancel a payment by merchant reference when no psp reference was received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalCancel {
    pub merchant_account: String,
    pub original_merchant_reference: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reference: String,
}

/// Acknowledgement returned by every modification endpoint,
/// e.g. `[capture-received]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModificationResponse {
    #[serde(default)]
    pub psp_reference: String,
    #[serde(default)]
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_wire_format() {
        let req = Capture {
            modification_amount: Amount::new("EUR", 5.0),
            reference: "cap-1".into(),
            merchant_account: "TestMerchant".into(),
            original_reference: "8313547924770610".into(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["modificationAmount"]["value"], 500.0);
        assert_eq!(json["modificationAmount"]["currency"], "EUR");
        assert_eq!(json["originalReference"], "8313547924770610");
    }

    #[test]
    fn technical_cancel_omits_empty_reference() {
        let req = TechnicalCancel {
            merchant_account: "TestMerchant".into(),
            original_merchant_reference: "order-7".into(),
            reference: String::new(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["originalMerchantReference"], "order-7");
        assert!(json.get("reference").is_none());
    }

    #[test]
    fn parse_modification_response() {
        let resp: ModificationResponse = serde_json::from_str(
            r#"{"pspReference":"8413547924770610","response":"[cancelOrRefund-received]"}"#,
        )
        .unwrap();
        assert_eq!(resp.response, "[cancelOrRefund-received]");
    }
}
