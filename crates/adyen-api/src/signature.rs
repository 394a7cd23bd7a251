//! Signing of hosted payment page requests and verification of
//! notification signatures.

use crate::credentials::Credentials;
use crate::directory_lookup::DirectoryLookupRequest;
use crate::error::AdyenError;
use crate::hmac::{compute_signature, signing_string, values_string, verify_signature};
use crate::hpp::HppSignable;
use crate::notification::NotificationRequestItemData;
use crate::skip_hpp::SkipHppRequest;

/// Sign any hosted payment page request in place.
///
/// Fails before any hashing if the request has no merchant account or skin
/// code, or if no HMAC key is configured. On error `merchant_sig` is left
/// untouched.
pub fn sign_hpp_request<R: HppSignable + ?Sized>(
    request: &mut R,
    credentials: &Credentials,
) -> Result<(), AdyenError> {
    if request.merchant_account().is_empty()
        || request.skin_code().is_empty()
        || credentials.hmac_key().is_empty()
    {
        return Err(AdyenError::Config(
            "merchant account, skin code and HMAC key must be specified".to_string(),
        ));
    }

    let data = signing_string(&request.signing_fields());
    let signature = compute_signature(credentials.hmac_key(), &data)?;
    request.set_merchant_sig(signature);
    Ok(())
}

pub fn sign_directory_lookup(
    request: &mut DirectoryLookupRequest,
    credentials: &Credentials,
) -> Result<(), AdyenError> {
    sign_hpp_request(request, credentials)
}

pub fn sign_skip_hosted_page(
    request: &mut SkipHppRequest,
    credentials: &Credentials,
) -> Result<(), AdyenError> {
    sign_hpp_request(request, credentials)
}

impl DirectoryLookupRequest {
    /// See [`sign_directory_lookup`].
    pub fn calculate_signature(&mut self, credentials: &Credentials) -> Result<(), AdyenError> {
        sign_directory_lookup(self, credentials)
    }
}

impl SkipHppRequest {
    /// See [`sign_skip_hosted_page`].
    pub fn calculate_signature(&mut self, credentials: &Credentials) -> Result<(), AdyenError> {
        sign_skip_hosted_page(self, credentials)
    }
}

/// The string a notification item is signed over.
pub fn notification_signing_data(item: &NotificationRequestItemData) -> String {
    let value = item.amount.value_text();
    values_string(&[
        item.psp_reference.as_str(),
        item.original_reference.as_str(),
        item.merchant_account_code.as_str(),
        item.merchant_reference.as_str(),
        value.as_str(),
        item.amount.currency.as_str(),
        item.event_code.as_str(),
        item.success.as_str(),
    ])
}

/// Check that a notification item was signed with the configured key.
///
/// `Ok(false)` means the signature does not match, which is what a forged or
/// corrupted notification looks like. Errors are reserved for the cases where
/// no comparison could be made: no signature in the item
/// ([`AdyenError::MissingSignature`]), no key configured
/// ([`AdyenError::MissingHmacKey`]) or a key that is not hex.
pub fn validate_notification_signature(
    item: &NotificationRequestItemData,
    credentials: &Credentials,
) -> Result<bool, AdyenError> {
    let supplied = item.hmac_signature().ok_or(AdyenError::MissingSignature)?;
    if credentials.hmac_key().is_empty() {
        return Err(AdyenError::MissingHmacKey);
    }

    let valid = verify_signature(
        credentials.hmac_key(),
        &notification_signing_data(item),
        supplied,
    )?;
    if !valid {
        tracing::warn!(
            psp_reference = %item.psp_reference,
            event_code = %item.event_code,
            "notification HMAC signature mismatch"
        );
    }
    Ok(valid)
}

impl NotificationRequestItemData {
    /// See [`validate_notification_signature`].
    pub fn validate_signature(&self, credentials: &Credentials) -> Result<bool, AdyenError> {
        validate_notification_signature(self, credentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amount::Amount;
    use crate::environment::Environment;
    use crate::notification::NotificationAdditionalData;
    use crate::string_bool::StringBool;

    const KEY: &str = "44782DEF547AAA06C910C43932B1EB0C71FC68D9D0C057550C48EC2ACF6BA056";

    fn credentials(key: &str) -> Credentials {
        Credentials::builder(Environment::testing())
            .username("username")
            .password("fake_password")
            .merchant_account("TestMerchant")
            .hpp(key, "ABC123", "en_GB")
            .build()
            .unwrap()
    }

    fn item() -> NotificationRequestItemData {
        NotificationRequestItemData {
            additional_data: NotificationAdditionalData::default(),
            amount: Amount {
                value: 1130.0,
                currency: "EUR".to_string(),
            },
            psp_reference: "7914073381342284".to_string(),
            event_code: "AUTHORISATION".to_string(),
            event_date: None,
            merchant_account_code: "TestMerchant".to_string(),
            operations: vec![],
            merchant_reference: "TestPayment-1407325143704".to_string(),
            original_reference: String::new(),
            payment_method: "visa".to_string(),
            reason: String::new(),
            success: StringBool(true),
        }
    }

    #[test]
    fn test_notification_signing_data() {
        assert_eq!(
            notification_signing_data(&item()),
            "7914073381342284::TestMerchant:TestPayment-1407325143704:1130:EUR:AUTHORISATION:true"
        );
    }

    #[test]
    fn test_empty_skin_code_leaves_request_unsigned() {
        let mut req = DirectoryLookupRequest {
            merchant_account: "TestMerchant".to_string(),
            ..Default::default()
        };
        let err = sign_directory_lookup(&mut req, &credentials(KEY)).unwrap_err();
        assert!(matches!(err, AdyenError::Config(_)));
        assert!(req.merchant_sig.is_none());
    }

    #[test]
    fn test_precondition_errors_are_distinguishable() {
        assert!(AdyenError::MissingSignature.is_precondition());
        assert!(AdyenError::MissingHmacKey.is_precondition());
        assert!(!AdyenError::Config(String::new()).is_precondition());
    }
}
