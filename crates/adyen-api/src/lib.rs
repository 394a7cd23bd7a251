//! Typed Adyen payment API structures and HMAC signing.
//!
//! This crate performs no network I/O. It provides the request/response
//! types, endpoint URL construction and the two security-relevant pieces of
//! the integration:
//!
//! - **Outbound**: hosted payment page requests ([`DirectoryLookupRequest`],
//!   [`SkipHppRequest`]) are signed in place with a `merchantSig`
//!   ([`sign_directory_lookup`], [`sign_skip_hosted_page`]).
//! - **Inbound**: notification items are authenticated against their
//!   `hmacSignature` ([`validate_notification_signature`]).
//!
//! The HTTP transport lives in the `adyen-api-client` crate.
//!
//! # Quick example
//!
//! ```
//! use adyen::{hpp_redirect_url, Credentials, DirectoryLookupRequest, Environment};
//!
//! let credentials = Credentials::builder(Environment::testing())
//!     .username("ws@Company.Test")
//!     .password("secret")
//!     .merchant_account("TestMerchant")
//!     .hpp("44782DEF547AAA06C910C43932B1EB0C71FC68D9D0C057550C48EC2ACF6BA056", "ABC123", "en_GB")
//!     .build()
//!     .unwrap();
//!
//! let mut request = DirectoryLookupRequest {
//!     currency_code: "EUR".into(),
//!     merchant_account: credentials.merchant_account().into(),
//!     payment_amount: 1000,
//!     skin_code: credentials.skin_code().into(),
//!     merchant_reference: "Order-1".into(),
//!     session_validity: "2015-11-29T13:42:40+01:00".into(),
//!     ship_before_date: "2015-11-30".into(),
//!     country_code: "NL".into(),
//!     merchant_sig: None,
//! };
//! request.calculate_signature(&credentials).unwrap();
//!
//! let url = hpp_redirect_url(credentials.environment(), &request).unwrap();
//! assert!(url.as_str().contains("merchantSig="));
//! ```

// Core types
pub mod amount;
pub mod constants;
pub mod credentials;
pub mod environment;
pub mod error;
pub mod response;
pub mod string_bool;

// Signing
pub mod hmac;
pub mod hpp;
pub mod security;
pub mod signature;

// Hosted payment pages and notifications
pub mod directory_lookup;
pub mod notification;
pub mod skip_hpp;

// API request/response structures
pub mod checkout;
pub mod modification;
pub mod payment;
pub mod recurring;

// Re-exports
pub use amount::Amount;
pub use constants::*;
pub use credentials::{Credentials, CredentialsBuilder, HppSettings};
pub use environment::Environment;
pub use error::AdyenError;
pub use response::{check_response, decode_response, ApiError};
pub use string_bool::StringBool;

pub use directory_lookup::{DirectoryLookupRequest, DirectoryLookupResponse};
pub use hpp::{hpp_redirect_url, HppSignable};
pub use notification::{NotificationRequest, NotificationRequestItem, NotificationRequestItemData};
pub use signature::{
    sign_directory_lookup, sign_hpp_request, sign_skip_hosted_page,
    validate_notification_signature,
};
pub use skip_hpp::SkipHppRequest;

pub use checkout::*;
pub use modification::*;
pub use payment::*;
pub use recurring::*;
