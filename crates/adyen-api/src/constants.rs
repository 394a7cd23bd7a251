/// Currency used when a caller does not pick one.
pub const DEFAULT_CURRENCY: &str = "EUR";

/// Service segment of the payment and modification endpoints.
pub const PAYMENT_SERVICE: &str = "Payment";

/// Service segment of the recurring endpoints.
pub const RECURRING_SERVICE: &str = "Recurring";

/// Payment API version.
pub const PAYMENT_API_VERSION: &str = "v30";

/// Recurring API version.
pub const RECURRING_API_VERSION: &str = "v25";

/// Checkout API version.
pub const CHECKOUT_API_VERSION: &str = "v32";

/// Hosted payment page request names, as they appear in `{hpp}{name}.shtml`.
pub const HPP_DIRECTORY: &str = "directory";
pub const HPP_SKIP_DETAILS: &str = "skipDetails";
pub const HPP_SELECT: &str = "select";
pub const HPP_PAY: &str = "pay";

/// Recurring contract types.
pub const ONECLICK: &str = "ONECLICK";
pub const RECURRING: &str = "RECURRING";

/// Reasons accepted by adjust-authorisation.
pub const DELAYED_CHARGE: &str = "DelayedCharge";
pub const NO_SHOW: &str = "NoShow";

/// Minor-unit exponent for currencies that do not use two decimals.
///
/// Anything not listed uses two.
pub(crate) const ZERO_DECIMAL_CURRENCIES: [&str; 15] = [
    "CVE", "DJF", "GNF", "IDR", "JPY", "KMF", "KRW", "PYG", "RWF", "UGX", "VND", "VUV", "XAF",
    "XOF", "XPF",
];

pub(crate) const THREE_DECIMAL_CURRENCIES: [&str; 7] =
    ["BHD", "IQD", "JOD", "KWD", "LYD", "OMR", "TND"];
