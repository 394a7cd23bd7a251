//! Checkout `paymentMethods`.

use serde::{Deserialize, Serialize};

use crate::amount::Amount;

/// Request for the payment methods available to a shopper.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethods {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    /// `Web`, `iOS` or `Android`.
    pub channel: String,
    pub country_code: String,
    pub merchant_account: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub shopper_locale: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub shopper_reference: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodsResponse {
    #[serde(default)]
    pub payment_methods: Vec<PaymentMethodDetails>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub one_click_payment_methods: Vec<OneClickPaymentMethodDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodDetails {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<PaymentMethodDetailsInfo>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodDetailsInfo {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<PaymentMethodItem>,
    pub key: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodItem {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OneClickPaymentMethodDetails {
    #[serde(default)]
    pub details: Vec<PaymentMethodType>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub stored_details: PaymentMethodStoredDetails,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodType {
    pub key: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodStoredDetails {
    #[serde(default)]
    pub card: PaymentMethodCard,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentMethodCard {
    pub expiry_month: String,
    pub expiry_year: String,
    pub holder_name: String,
    pub number: String,
}
