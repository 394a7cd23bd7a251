//! Async client for the Adyen payment APIs.
//!
//! Wraps `reqwest` around the types and signing of the `adyen` crate. API
//! calls are JSON POSTs with basic auth; hosted payment page calls are signed
//! GETs.
//!
//! # Quick Example
//!
//! ```no_run
//! use adyen_client::{AdyenClient, Credentials, Environment, RecurringDetailsRequest};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let creds = Credentials::builder(Environment::testing())
//!     .username("ws@Company.Test")
//!     .password("secret")
//!     .merchant_account("TestMerchant")
//!     .build()
//!     .unwrap();
//! let client = AdyenClient::new(creds).unwrap();
//!
//! let details = client
//!     .recurring()
//!     .list_recurring_details(&RecurringDetailsRequest {
//!         merchant_account: "TestMerchant".into(),
//!         shopper_reference: "shopper-1".into(),
//!         recurring: None,
//!     })
//!     .await
//!     .unwrap();
//! println!("{} stored methods", details.details.len());
//! # }
//! ```

mod client;
mod config;
pub mod gateway;

pub use client::{AdyenClient, DEFAULT_TIMEOUT};
pub use config::ClientConfig;

// Re-export commonly needed types from core
pub use adyen::{
    AdjustAuthorisation, AdyenError, Amount, ApiError, Authorise, Authorise3D,
    AuthoriseEncrypted, AuthoriseResponse, Cancel, Capture, Credentials, DirectoryLookupRequest,
    DirectoryLookupResponse, Environment, ModificationResponse, NotificationRequest,
    NotificationRequestItemData, PaymentMethods, PaymentMethodsResponse, RecurringDetailsRequest,
    RecurringDetailsResult, RecurringDisableRequest, RecurringDisableResponse, Refund,
    SkipHppRequest, TechnicalCancel, DEFAULT_CURRENCY,
};
