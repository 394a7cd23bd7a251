use adyen::{
    hpp_redirect_url, sign_hpp_request, AdyenError, DirectoryLookupRequest,
    DirectoryLookupResponse, HppSignable, SkipHppRequest,
};
use url::Url;

use crate::client::AdyenClient;

/// Hosted payment pages. Merchant account, skin code and shopper locale are
/// taken from the client's credentials when the request leaves them empty.
pub struct HppGateway<'a> {
    client: &'a AdyenClient,
}

impl<'a> HppGateway<'a> {
    pub(crate) fn new(client: &'a AdyenClient) -> Self {
        Self { client }
    }

    /// Sign a directory lookup and return its URL without sending it.
    pub fn directory_lookup_url(
        &self,
        mut request: DirectoryLookupRequest,
    ) -> Result<Url, AdyenError> {
        let creds = self.client.credentials();
        fill(&mut request.merchant_account, creds.merchant_account());
        fill(&mut request.skin_code, creds.skin_code());
        self.signed_url(&mut request)
    }

    /// Payment methods available for an order.
    pub async fn directory_lookup(
        &self,
        request: DirectoryLookupRequest,
    ) -> Result<DirectoryLookupResponse, AdyenError> {
        let url = self.directory_lookup_url(request)?;
        self.client.execute_hpp(url).await
    }

    /// Redirect URL that takes the shopper straight to one payment method.
    pub fn skip_details_url(&self, mut request: SkipHppRequest) -> Result<Url, AdyenError> {
        let creds = self.client.credentials();
        fill(&mut request.merchant_account, creds.merchant_account());
        fill(&mut request.skin_code, creds.skin_code());
        fill(&mut request.shopper_locale, creds.hpp().shopper_locale());
        self.signed_url(&mut request)
    }

    fn signed_url<R: HppSignable>(&self, request: &mut R) -> Result<Url, AdyenError> {
        let creds = self.client.credentials();
        sign_hpp_request(request, creds)?;
        hpp_redirect_url(creds.environment(), &*request)
    }
}

fn fill(field: &mut String, fallback: &str) {
    if field.is_empty() {
        *field = fallback.to_string();
    }
}
