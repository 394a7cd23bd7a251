//! Directory lookup: the payment methods available for an order on a skin.

use serde::{Deserialize, Serialize};

use crate::constants::HPP_DIRECTORY;
use crate::hmac::SigningField;
use crate::hpp::HppSignable;

/// Directory lookup parameters.
///
/// `country_code` may be set to try local payment methods from a shopper IP in
/// another country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryLookupRequest {
    pub currency_code: String,
    pub merchant_account: String,
    /// Minor units.
    pub payment_amount: u64,
    pub skin_code: String,
    pub merchant_reference: String,
    pub session_validity: String,
    pub ship_before_date: String,
    pub country_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_sig: Option<String>,
}

impl HppSignable for DirectoryLookupRequest {
    fn page(&self) -> &'static str {
        HPP_DIRECTORY
    }

    fn merchant_account(&self) -> &str {
        &self.merchant_account
    }

    fn skin_code(&self) -> &str {
        &self.skin_code
    }

    fn signing_fields(&self) -> Vec<SigningField> {
        vec![
            ("countryCode", self.country_code.clone()),
            ("currencyCode", self.currency_code.clone()),
            ("merchantAccount", self.merchant_account.clone()),
            ("merchantReference", self.merchant_reference.clone()),
            ("paymentAmount", self.payment_amount.to_string()),
            ("sessionValidity", self.session_validity.clone()),
            ("shipBeforeDate", self.ship_before_date.clone()),
            ("skinCode", self.skin_code.clone()),
        ]
    }

    fn merchant_sig(&self) -> Option<&str> {
        self.merchant_sig.as_deref()
    }

    fn set_merchant_sig(&mut self, signature: String) {
        self.merchant_sig = Some(signature);
    }
}

/// Payment methods returned by a directory lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryLookupResponse {
    #[serde(default)]
    pub payment_methods: Vec<HppPaymentMethod>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HppPaymentMethod {
    pub brand_code: String,
    pub name: String,
    #[serde(default)]
    pub logos: Logos,
    #[serde(default)]
    pub issuers: Vec<Issuer>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Logos {
    #[serde(default)]
    pub normal: String,
    #[serde(default)]
    pub small: String,
    #[serde(default)]
    pub tiny: String,
}

/// Bank issuer offered by a payment method such as iDEAL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issuer {
    pub issuer_id: String,
    pub name: String,
}
