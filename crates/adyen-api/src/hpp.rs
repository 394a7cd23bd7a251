//! Hosted payment page requests: the signable seam and redirect URLs.

use url::Url;

use crate::environment::Environment;
use crate::error::AdyenError;
use crate::hmac::SigningField;

/// Query parameter carrying the request signature.
pub const MERCHANT_SIG: &str = "merchantSig";

/// A hosted payment page request that carries a `merchantSig`.
///
/// Implementors list their signed fields in the exact order the remote side
/// hashes them. The order is part of the protocol, never derived from a map.
pub trait HppSignable {
    /// Name of the page this request is sent to (`directory`, `skipDetails`).
    fn page(&self) -> &'static str;

    fn merchant_account(&self) -> &str;

    fn skin_code(&self) -> &str;

    /// Signed fields with their raw values, in signing order.
    fn signing_fields(&self) -> Vec<SigningField>;

    fn merchant_sig(&self) -> Option<&str>;

    fn set_merchant_sig(&mut self, signature: String);

    /// Every wire parameter of the request, `merchantSig` last when present.
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = self.signing_fields();
        if let Some(sig) = self.merchant_sig() {
            pairs.push((MERCHANT_SIG, sig.to_string()));
        }
        pairs
    }
}

/// Build the redirect URL `{hpp}{page}.shtml?{params}` for a request,
/// URL-encoding every parameter.
pub fn hpp_redirect_url<R: HppSignable + ?Sized>(
    env: &Environment,
    request: &R,
) -> Result<Url, AdyenError> {
    let base = env.hpp_url(request.page());
    let mut url = Url::parse(&base).map_err(|e| AdyenError::InvalidUrl(format!("{base}: {e}")))?;
    url.query_pairs_mut().extend_pairs(request.query_pairs());
    Ok(url)
}
