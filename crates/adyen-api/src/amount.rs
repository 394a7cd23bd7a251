use serde::{Deserialize, Serialize, Serializer};

use crate::constants::{THREE_DECIMAL_CURRENCIES, ZERO_DECIMAL_CURRENCIES};

/// Value and currency. `value` is expressed in minor units (1050 is EUR 10.50).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amount {
    #[serde(serialize_with = "serialize_minor_units")]
    pub value: f64,
    pub currency: String,
}

impl Amount {
    /// Build an amount from a major-unit figure, scaling by the currency's
    /// decimal places and rounding to the nearest minor unit.
    pub fn new(currency: &str, major_units: f64) -> Self {
        let scale = 10f64.powi(decimal_places(currency) as i32);
        Self {
            value: (major_units * scale).round(),
            currency: currency.to_string(),
        }
    }

    /// Text form of `value` used in notification signatures: shortest
    /// round-trip decimal, no trailing `.0`.
    pub fn value_text(&self) -> String {
        format!("{}", self.value)
    }
}

// Whole values go out as JSON integers; the API rejects `1000.0`.
fn serialize_minor_units<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Number of minor-unit decimals for an ISO 4217 currency code.
pub fn decimal_places(currency: &str) -> u32 {
    if ZERO_DECIMAL_CURRENCIES.contains(&currency) {
        0
    } else if THREE_DECIMAL_CURRENCIES.contains(&currency) {
        3
    } else {
        2
    }
}
