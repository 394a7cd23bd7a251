use adyen::{
    hpp_redirect_url, sign_directory_lookup, sign_skip_hosted_page,
    validate_notification_signature, AdyenError, Credentials, DirectoryLookupRequest,
    Environment, NotificationRequestItemData, SkipHppRequest,
};

const KEY: &str = "44782DEF547AAA06C910C43932B1EB0C71FC68D9D0C057550C48EC2ACF6BA056";
const WRONG_KEY: &str = "DFB1EB5485895CFA84146406857104ABB4CBCABDC8AAF103A624C8F6A3EAAB00";

const DIRECTORY_SIG: &str = "AHelPqhEv02OvP6PN5eeboITvHkPU0mryjfiyRe1NZU=";
const NOTIFICATION_SIG: &str = "coqCmt/IZ4E3CzPvMY8zTjQVL5hYJUiBRg8UU+iCWo0=";

const NOTIFICATION_ITEM: &str = r#"{
    "additionalData": {
        "authCode": "1234",
        "cardSummary": "7777"
    },
    "amount": {
        "currency": "EUR",
        "value": 1130
    },
    "eventCode": "AUTHORISATION",
    "eventDate": "2020-01-01T10:00:00+05:00",
    "merchantAccountCode": "TestMerchant",
    "merchantReference": "TestPayment-1407325143704",
    "operations": ["CANCEL", "CAPTURE", "REFUND"],
    "paymentMethod": "visa",
    "pspReference": "7914073381342284",
    "reason": "1234:7777:12\/2012",
    "success": "true"
}"#;

fn credentials(key: &str) -> Credentials {
    Credentials::builder(Environment::testing())
        .username("username")
        .password("fake_password")
        .merchant_account("TestMerchant")
        .hpp(key, "ABC123", "en_GB")
        .build()
        .unwrap()
}

fn directory_request() -> DirectoryLookupRequest {
    DirectoryLookupRequest {
        currency_code: "EUR".to_string(),
        merchant_account: "TestMerchant".to_string(),
        payment_amount: 1000,
        skin_code: "ABC123".to_string(),
        merchant_reference: "Order-1".to_string(),
        session_validity: "2015-11-29T13:42:40+01:00".to_string(),
        ship_before_date: "2015-11-30".to_string(),
        country_code: "NL".to_string(),
        merchant_sig: None,
    }
}

fn skip_request() -> SkipHppRequest {
    SkipHppRequest {
        merchant_reference: "Order-1".to_string(),
        payment_amount: 1000,
        currency_code: "EUR".to_string(),
        ship_before_date: "2015-11-30".to_string(),
        skin_code: "ABC123".to_string(),
        merchant_account: "TestMerchant".to_string(),
        shopper_locale: "en_GB".to_string(),
        session_validity: "2015-11-29T13:42:40+01:00".to_string(),
        country_code: "NL".to_string(),
        brand_code: "ideal".to_string(),
        issuer_id: "1121".to_string(),
        merchant_sig: None,
    }
}

fn notification_item(signature: Option<&str>) -> NotificationRequestItemData {
    let mut item: NotificationRequestItemData = serde_json::from_str(NOTIFICATION_ITEM).unwrap();
    item.additional_data.hmac_signature = signature.map(str::to_string);
    item
}

// -- Outbound: hosted payment page requests --

#[test]
fn test_directory_lookup_signature() {
    let mut req = directory_request();
    sign_directory_lookup(&mut req, &credentials(KEY)).unwrap();
    assert_eq!(req.merchant_sig.as_deref(), Some(DIRECTORY_SIG));
}

#[test]
fn test_skip_hosted_page_signature() {
    let mut req = skip_request();
    sign_skip_hosted_page(&mut req, &credentials(KEY)).unwrap();
    assert_eq!(
        req.merchant_sig.as_deref(),
        Some("Sr2Vg9bHPpHL/zDeOxmcKhEIGubdrl+4UbaLAeDTH8M=")
    );
}

#[test]
fn test_signature_escapes_separator_and_backslash() {
    let mut req = DirectoryLookupRequest {
        merchant_reference: "Order:1\\A".to_string(),
        ..directory_request()
    };
    req.calculate_signature(&credentials(KEY)).unwrap();
    assert_eq!(
        req.merchant_sig.as_deref(),
        Some("oxUBxxaXexPcrmmOjupmPJpeIJf6f/tlgisek1RA0HQ=")
    );
}

#[test]
fn test_empty_country_code_is_still_signed() {
    let mut req = DirectoryLookupRequest {
        country_code: String::new(),
        ..directory_request()
    };
    req.calculate_signature(&credentials(KEY)).unwrap();
    assert_eq!(
        req.merchant_sig.as_deref(),
        Some("wJCE/YU77W5ZgISTdGUeEBGgLIuSN/gzFF161oEbfXw=")
    );
}

#[test]
fn test_signing_is_deterministic() {
    let creds = credentials(KEY);
    let mut first = directory_request();
    let mut second = directory_request();
    first.calculate_signature(&creds).unwrap();
    second.calculate_signature(&creds).unwrap();
    assert_eq!(first.merchant_sig, second.merchant_sig);

    // Re-signing an already signed request yields the same value.
    first.calculate_signature(&creds).unwrap();
    assert_eq!(first.merchant_sig, second.merchant_sig);
}

#[test]
fn test_missing_inputs_leave_request_unsigned() {
    let creds = credentials(KEY);

    let mut no_account = DirectoryLookupRequest {
        merchant_account: String::new(),
        ..directory_request()
    };
    assert!(matches!(
        no_account.calculate_signature(&creds),
        Err(AdyenError::Config(_))
    ));
    assert!(no_account.merchant_sig.is_none());

    let mut no_skin = SkipHppRequest {
        skin_code: String::new(),
        ..skip_request()
    };
    assert!(matches!(
        no_skin.calculate_signature(&creds),
        Err(AdyenError::Config(_))
    ));
    assert!(no_skin.merchant_sig.is_none());

    let mut no_key = directory_request();
    assert!(matches!(
        no_key.calculate_signature(&credentials("")),
        Err(AdyenError::Config(_))
    ));
    assert!(no_key.merchant_sig.is_none());
}

#[test]
fn test_malformed_key_fails_signing() {
    let mut req = directory_request();
    let err = req.calculate_signature(&credentials("invalid_hmac")).unwrap_err();
    assert!(matches!(err, AdyenError::InvalidHmacKey(_)));
    assert!(req.merchant_sig.is_none());
}

#[test]
fn test_redirect_url_carries_encoded_signature() {
    let creds = credentials(KEY);
    let mut req = directory_request();
    req.calculate_signature(&creds).unwrap();

    let url = hpp_redirect_url(creds.environment(), &req).unwrap();
    assert_eq!(url.path(), "/hpp/directory.shtml");

    let query = url.query().unwrap();
    assert!(query.starts_with("countryCode=NL&currencyCode=EUR"));
    assert!(query.contains("sessionValidity=2015-11-29T13%3A42%3A40%2B01%3A00"));
    assert!(query.ends_with("merchantSig=AHelPqhEv02OvP6PN5eeboITvHkPU0mryjfiyRe1NZU%3D"));

    let sig = url
        .query_pairs()
        .find(|(k, _)| k == "merchantSig")
        .map(|(_, v)| v.into_owned());
    assert_eq!(sig.as_deref(), Some(DIRECTORY_SIG));
}

// -- Inbound: notification items --

#[test]
fn test_notification_valid_signature() {
    let item = notification_item(Some(NOTIFICATION_SIG));
    assert!(validate_notification_signature(&item, &credentials(KEY)).unwrap());
    assert!(item.validate_signature(&credentials(KEY)).unwrap());
}

#[test]
fn test_notification_wrong_key_is_rejected() {
    let item = notification_item(Some(NOTIFICATION_SIG));
    assert!(!validate_notification_signature(&item, &credentials(WRONG_KEY)).unwrap());
}

#[test]
fn test_notification_tampered_amount_is_rejected() {
    let mut item = notification_item(Some(NOTIFICATION_SIG));
    item.amount.value = 113000.0;
    assert!(!validate_notification_signature(&item, &credentials(KEY)).unwrap());
}

#[test]
fn test_notification_without_signature() {
    let item = notification_item(None);
    let err = validate_notification_signature(&item, &credentials(KEY)).unwrap_err();
    assert!(matches!(err, AdyenError::MissingSignature));

    let blank = notification_item(Some(""));
    let err = validate_notification_signature(&blank, &credentials(KEY)).unwrap_err();
    assert!(matches!(err, AdyenError::MissingSignature));
}

#[test]
fn test_notification_without_key() {
    let item = notification_item(Some(NOTIFICATION_SIG));
    let err = validate_notification_signature(&item, &credentials("")).unwrap_err();
    assert!(matches!(err, AdyenError::MissingHmacKey));
    assert!(err.is_precondition());
}

#[test]
fn test_notification_malformed_key() {
    let item = notification_item(Some(NOTIFICATION_SIG));
    let err = validate_notification_signature(&item, &credentials("invalid_hmac")).unwrap_err();
    assert!(matches!(err, AdyenError::InvalidHmacKey(_)));
    assert!(!err.is_precondition());
}
