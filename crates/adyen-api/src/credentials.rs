//! API and hosted payment page credentials.
//!
//! A [`Credentials`] value is built once when a client is set up and is only
//! read afterwards; signing and validation borrow it.

use std::fmt;

use crate::environment::Environment;
use crate::error::AdyenError;

/// Hosted payment page settings of a skin.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct HppSettings {
    hmac_key: String,
    skin_code: String,
    shopper_locale: String,
}

impl HppSettings {
    /// Hex-encoded HMAC key generated with the skin.
    pub fn hmac_key(&self) -> &str {
        &self.hmac_key
    }

    pub fn skin_code(&self) -> &str {
        &self.skin_code
    }

    pub fn shopper_locale(&self) -> &str {
        &self.shopper_locale
    }
}

impl fmt::Debug for HppSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HppSettings")
            .field("hmac_key", &redacted(&self.hmac_key))
            .field("skin_code", &self.skin_code)
            .field("shopper_locale", &self.shopper_locale)
            .finish()
    }
}

/// Immutable credential bundle shared by every call a client makes.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    env: Environment,
    username: String,
    password: String,
    client_id: String,
    merchant_account: String,
    hpp: HppSettings,
}

impl Credentials {
    pub fn builder(env: Environment) -> CredentialsBuilder {
        CredentialsBuilder {
            env,
            username: String::new(),
            password: String::new(),
            client_id: String::new(),
            merchant_account: String::new(),
            hpp: HppSettings::default(),
        }
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Client id used to load the client-side encryption script.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn merchant_account(&self) -> &str {
        &self.merchant_account
    }

    pub fn hpp(&self) -> &HppSettings {
        &self.hpp
    }

    /// Shortcut for `hpp().hmac_key()`.
    pub fn hmac_key(&self) -> &str {
        &self.hpp.hmac_key
    }

    /// Shortcut for `hpp().skin_code()`.
    pub fn skin_code(&self) -> &str {
        &self.hpp.skin_code
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("env", &self.env)
            .field("username", &self.username)
            .field("password", &redacted(&self.password))
            .field("client_id", &self.client_id)
            .field("merchant_account", &self.merchant_account)
            .field("hpp", &self.hpp)
            .finish()
    }
}

/// Builder for [`Credentials`].
#[derive(Clone)]
pub struct CredentialsBuilder {
    env: Environment,
    username: String,
    password: String,
    client_id: String,
    merchant_account: String,
    hpp: HppSettings,
}

impl CredentialsBuilder {
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = client_id.into();
        self
    }

    pub fn merchant_account(mut self, merchant_account: impl Into<String>) -> Self {
        self.merchant_account = merchant_account.into();
        self
    }

    /// Hosted payment page settings. The HMAC key is taken as configured; it
    /// is only decoded when something is signed.
    pub fn hpp(
        mut self,
        hmac_key: impl Into<String>,
        skin_code: impl Into<String>,
        shopper_locale: impl Into<String>,
    ) -> Self {
        self.hpp = HppSettings {
            hmac_key: hmac_key.into(),
            skin_code: skin_code.into(),
            shopper_locale: shopper_locale.into(),
        };
        self
    }

    /// Set only the HMAC key, e.g. for a notification endpoint that never
    /// builds hosted payment page URLs.
    pub fn hmac_key(mut self, hmac_key: impl Into<String>) -> Self {
        self.hpp.hmac_key = hmac_key.into();
        self
    }

    pub fn build(self) -> Result<Credentials, AdyenError> {
        if self.username.is_empty() || self.password.is_empty() {
            return Err(AdyenError::Config(
                "API username and password must be specified".to_string(),
            ));
        }
        Ok(Credentials {
            env: self.env,
            username: self.username,
            password: self.password,
            client_id: self.client_id,
            merchant_account: self.merchant_account,
            hpp: self.hpp,
        })
    }
}

fn redacted(secret: &str) -> &'static str {
    if secret.is_empty() {
        "<unset>"
    } else {
        "<redacted>"
    }
}
