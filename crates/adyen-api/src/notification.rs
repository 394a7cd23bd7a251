//! Asynchronous notifications posted by Adyen.
//!
//! Which fields are populated depends on the event; everything beyond the
//! signed core is optional.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::amount::Amount;
use crate::string_bool::StringBool;

/// Notification document: environment flag and the items to process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRequest {
    pub live: StringBool,
    #[serde(default)]
    pub notification_items: Vec<NotificationRequestItem>,
}

/// Wrapper object around each item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationRequestItem {
    #[serde(rename = "NotificationRequestItem")]
    pub notification_request_item: NotificationRequestItemData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRequestItemData {
    #[serde(default)]
    pub additional_data: NotificationAdditionalData,
    pub amount: Amount,
    pub psp_reference: String,
    pub event_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_date: Option<DateTime<FixedOffset>>,
    pub merchant_account_code: String,
    #[serde(default)]
    pub operations: Vec<String>,
    pub merchant_reference: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub original_reference: String,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reason: String,
    pub success: StringBool,
}

impl NotificationRequestItemData {
    /// Signature claimed by the sender, if any.
    pub fn hmac_signature(&self) -> Option<&str> {
        self.additional_data
            .hmac_signature
            .as_deref()
            .filter(|s| !s.is_empty())
    }
}

/// Additional data of a notification item. Keys without a dedicated field
/// are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationAdditionalData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shopper_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shopper_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorised_amount_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorised_amount_currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hmac_signature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nof_reason_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nof_scheme_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rfi_reason_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rfi_scheme_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chargeback_reason_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chargeback_scheme_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"{
        "live": "false",
        "notificationItems": [
            {
                "NotificationRequestItem": {
                    "additionalData": {
                        "cardSummary": "7777",
                        "expiryDate": "12\/2012",
                        "authCode": "1234",
                        "shopperIP": "127.0.0.1",
                        "totalFraudScore": "10",
                        " NAME1 ": "VALUE1"
                    },
                    "amount": { "currency": "EUR", "value": 10100 },
                    "eventCode": "AUTHORISATION",
                    "eventDate": "2017-12-27T14:53:06+01:00",
                    "merchantAccountCode": "TestCOM148",
                    "merchantReference": "8313842560770001",
                    "operations": ["CANCEL", "CAPTURE", "REFUND"],
                    "paymentMethod": "visa",
                    "pspReference": "test_AUTHORISATION_1",
                    "reason": "1234:7777:12\/2012",
                    "success": "true"
                }
            }
        ]
    }"#;

    #[test]
    fn test_parse_notification_document() {
        let doc: NotificationRequest = serde_json::from_str(DOCUMENT).unwrap();
        assert_eq!(doc.live, false);
        assert_eq!(doc.notification_items.len(), 1);

        let item = &doc.notification_items[0].notification_request_item;
        assert_eq!(item.event_code, "AUTHORISATION");
        assert_eq!(
            item.event_date.unwrap().to_rfc3339(),
            "2017-12-27T14:53:06+01:00"
        );
        assert_eq!(item.merchant_account_code, "TestCOM148");
        assert_eq!(item.merchant_reference, "8313842560770001");
        assert_eq!(item.operations.join(","), "CANCEL,CAPTURE,REFUND");
        assert_eq!(item.payment_method, "visa");
        assert_eq!(item.psp_reference, "test_AUTHORISATION_1");
        assert_eq!(item.reason, "1234:7777:12/2012");
        assert_eq!(item.success, true);
        assert_eq!(item.amount.value, 10100.0);
        assert_eq!(item.additional_data.auth_code.as_deref(), Some("1234"));
        assert_eq!(
            item.additional_data.extra.get("shopperIP"),
            Some(&serde_json::Value::String("127.0.0.1".into()))
        );
        assert!(item.hmac_signature().is_none());
    }

    #[test]
    fn test_rejects_unparseable_success_flag() {
        let broken = DOCUMENT.replace(r#""success": "true""#, r#""success": "maybe""#);
        assert!(serde_json::from_str::<NotificationRequest>(&broken).is_err());
    }
}
