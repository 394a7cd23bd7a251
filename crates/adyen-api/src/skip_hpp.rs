use serde::{Deserialize, Serialize};

use crate::constants::HPP_SKIP_DETAILS;
use crate::hmac::SigningField;
use crate::hpp::HppSignable;

/// Redirect straight to one payment method (and issuer), skipping the
/// method selection page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkipHppRequest {
    pub merchant_reference: String,
    /// Minor units.
    pub payment_amount: u64,
    pub currency_code: String,
    pub ship_before_date: String,
    pub skin_code: String,
    pub merchant_account: String,
    pub shopper_locale: String,
    pub session_validity: String,
    pub country_code: String,
    pub brand_code: String,
    pub issuer_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_sig: Option<String>,
}

impl HppSignable for SkipHppRequest {
    fn page(&self) -> &'static str {
        HPP_SKIP_DETAILS
    }

    fn merchant_account(&self) -> &str {
        &self.merchant_account
    }

    fn skin_code(&self) -> &str {
        &self.skin_code
    }

    fn signing_fields(&self) -> Vec<SigningField> {
        vec![
            ("brandCode", self.brand_code.clone()),
            ("countryCode", self.country_code.clone()),
            ("currencyCode", self.currency_code.clone()),
            ("issuerId", self.issuer_id.clone()),
            ("merchantAccount", self.merchant_account.clone()),
            ("merchantReference", self.merchant_reference.clone()),
            ("paymentAmount", self.payment_amount.to_string()),
            ("sessionValidity", self.session_validity.clone()),
            ("shipBeforeDate", self.ship_before_date.clone()),
            ("shopperLocale", self.shopper_locale.clone()),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signing_field_order() {
        let names: Vec<_> = SkipHppRequest::default()
            .signing_fields()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(
            names,
            [
                "brandCode",
                "countryCode",
                "currencyCode",
                "issuerId",
                "merchantAccount",
                "merchantReference",
                "paymentAmount",
                "sessionValidity",
                "shipBeforeDate",
                "shopperLocale",
                "skinCode",
            ]
        );
    }
}
