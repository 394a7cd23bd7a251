//! Endpoint sets for the Adyen test and live platforms.

use crate::error::AdyenError;

/// Base URLs of one Adyen platform. Decouples request building from
/// compile-time constants so tests can point a client at a local listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    api_url: String,
    client_url: String,
    hpp_url: String,
    checkout_url: String,
}

impl Environment {
    /// Adyen test platform.
    pub fn testing() -> Self {
        Self {
            api_url: "https://pal-test.adyen.com/pal/servlet".to_string(),
            client_url: "https://test.adyen.com/hpp/cse/js/".to_string(),
            hpp_url: "https://test.adyen.com/hpp/".to_string(),
            checkout_url: "https://checkout-test.adyen.com/services/PaymentSetupAndVerification"
                .to_string(),
        }
    }

    /// Adyen live platform.
    pub fn production() -> Self {
        Self {
            api_url: "https://pal-live.adyen.com/pal/servlet".to_string(),
            client_url: "https://live.adyen.com/hpp/cse/js/".to_string(),
            hpp_url: "https://live.adyen.com/hpp/".to_string(),
            checkout_url: "https://checkout-live.adyen.com/services/PaymentSetupAndVerification"
                .to_string(),
        }
    }

    /// Arbitrary endpoint set, e.g. a mock server.
    ///
    /// `client_url` and `hpp_url` are prefixes and should end with `/`.
    pub fn custom(
        api_url: impl Into<String>,
        client_url: impl Into<String>,
        hpp_url: impl Into<String>,
        checkout_url: impl Into<String>,
    ) -> Self {
        Self {
            api_url: api_url.into(),
            client_url: client_url.into(),
            hpp_url: hpp_url.into(),
            checkout_url: checkout_url.into(),
        }
    }

    /// Resolve `test`/`testing` or `live`/`production` (case-insensitive).
    pub fn from_name(name: &str) -> Result<Self, AdyenError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "test" | "testing" => Ok(Self::testing()),
            "live" | "production" => Ok(Self::production()),
            other => Err(AdyenError::Config(format!(
                "unknown environment '{other}', expected 'test' or 'live'"
            ))),
        }
    }

    /// `{api}/{service}/{version}`
    pub fn base_url(&self, service: &str, version: &str) -> String {
        format!("{}/{service}/{version}", self.api_url)
    }

    /// Client-side encryption script URL for a client id.
    pub fn client_url(&self, client_id: &str) -> String {
        format!("{}{client_id}.shtml", self.client_url)
    }

    /// Hosted payment page URL for a request name such as `directory`.
    pub fn hpp_url(&self, request: &str) -> String {
        format!("{}{request}.shtml", self.hpp_url)
    }

    /// `{checkout}/{version}/{method}`
    pub fn checkout_url(&self, method: &str, version: &str) -> String {
        format!("{}/{version}/{method}", self.checkout_url)
    }
}

impl Default for Environment {
    /// Defaults to the test platform.
    fn default() -> Self {
        Self::testing()
    }
}
