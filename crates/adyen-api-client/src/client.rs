use std::time::Duration;

use adyen::{decode_response, AdyenError, Amount, Credentials, DEFAULT_CURRENCY};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

/// Timeout applied to every call unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the Adyen APIs.
///
/// Holds the credentials used for basic auth and HPP signing, plus the
/// default currency for amounts built through [`AdyenClient::amount`]. The
/// gateways returned by [`AdyenClient::payment`] and friends borrow it.
#[derive(Debug, Clone)]
pub struct AdyenClient {
    http: reqwest::Client,
    credentials: Credentials,
    currency: String,
}

impl AdyenClient {
    pub fn new(credentials: Credentials) -> Result<Self, AdyenError> {
        Self::with_timeout(credentials, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(credentials: Credentials, timeout: Duration) -> Result<Self, AdyenError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| AdyenError::Http(format!("failed to build HTTP client: {e}")))?;
        Ok(Self::with_http_client(credentials, http))
    }

    /// Create a client with a custom reqwest::Client.
    pub fn with_http_client(credentials: Credentials, http: reqwest::Client) -> Self {
        Self {
            http,
            credentials,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }

    /// Replace the default currency.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Amount in the client's default currency.
    pub fn amount(&self, major_units: f64) -> Amount {
        Amount::new(&self.currency, major_units)
    }

    /// URL of the client-side encryption script for the configured client id.
    pub fn client_url(&self) -> String {
        self.credentials
            .environment()
            .client_url(self.credentials.client_id())
    }

    /// `{api}/{service}/{version}/{method}`
    pub(crate) fn api_url(&self, service: &str, version: &str, method: &str) -> String {
        format!(
            "{}/{method}",
            self.credentials.environment().base_url(service, version)
        )
    }

    /// POST `body` as JSON with basic auth and decode the response.
    pub async fn execute<B, T>(&self, url: &str, body: &B) -> Result<T, AdyenError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let payload = serde_json::to_vec(body)?;
        tracing::debug!(url, bytes = payload.len(), "adyen request");

        let resp = self
            .http
            .post(url)
            .basic_auth(
                self.credentials.username(),
                Some(self.credentials.password()),
            )
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(|e| AdyenError::Http(format!("request to {url} failed: {e}")))?;

        let status = resp.status().as_u16();
        let body = resp
            .bytes()
            .await
            .map_err(|e| AdyenError::Http(format!("failed to read response body: {e}")))?;
        tracing::debug!(url, status, bytes = body.len(), "adyen response");

        decode_response(status, &body)
    }

    /// GET a signed hosted payment page URL. No basic auth is sent; the
    /// `merchantSig` in the query authenticates the call.
    pub async fn execute_hpp<T: DeserializeOwned>(&self, url: Url) -> Result<T, AdyenError> {
        tracing::debug!(path = url.path(), "adyen hpp request");

        let resp = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| AdyenError::Http(format!("request to {} failed: {e}", url.path())))?;

        let status = resp.status().as_u16();
        let body = resp
            .bytes()
            .await
            .map_err(|e| AdyenError::Http(format!("failed to read response body: {e}")))?;
        tracing::debug!(path = url.path(), status, bytes = body.len(), "adyen hpp response");

        decode_response(status, &body)
    }
}
