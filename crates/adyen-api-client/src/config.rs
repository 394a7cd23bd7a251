use std::time::Duration;

use adyen::{AdyenError, Credentials, Environment, DEFAULT_CURRENCY};

use crate::client::{AdyenClient, DEFAULT_TIMEOUT};

/// Client settings read from `ADYEN_*` environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub credentials: Credentials,
    pub currency: String,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Read the configuration from the process environment.
    ///
    /// `ADYEN_USERNAME` and `ADYEN_PASSWORD` are required. `ADYEN_ENVIRONMENT`
    /// defaults to the test platform, `ADYEN_CURRENCY` to EUR and
    /// `ADYEN_TIMEOUT_SECS` to 30.
    pub fn from_env() -> Result<Self, AdyenError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, AdyenError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let env = match var("ADYEN_ENVIRONMENT") {
            Some(name) => Environment::from_name(&name)?,
            None => Environment::testing(),
        };

        let credentials = Credentials::builder(env)
            .username(var("ADYEN_USERNAME").unwrap_or_default())
            .password(var("ADYEN_PASSWORD").unwrap_or_default())
            .client_id(var("ADYEN_CLIENT_TOKEN").unwrap_or_default())
            .merchant_account(var("ADYEN_ACCOUNT").unwrap_or_default())
            .hpp(
                var("ADYEN_HMAC").unwrap_or_default(),
                var("ADYEN_SKINCODE").unwrap_or_default(),
                var("ADYEN_SHOPPER_LOCALE").unwrap_or_default(),
            )
            .build()?;

        let currency = var("ADYEN_CURRENCY").unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

        let timeout = match var("ADYEN_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| {
                    AdyenError::Config(format!("invalid ADYEN_TIMEOUT_SECS '{raw}'"))
                })?,
            None => DEFAULT_TIMEOUT,
        };

        if credentials.hmac_key().is_empty() {
            tracing::warn!("ADYEN_HMAC not set -- HPP signing and notification validation will fail");
        }

        Ok(Self {
            credentials,
            currency,
            timeout,
        })
    }

    pub fn into_client(self) -> Result<AdyenClient, AdyenError> {
        Ok(AdyenClient::with_timeout(self.credentials, self.timeout)?.with_currency(self.currency))
    }
}
