use adyen::{
    AdyenError, Authorise, Authorise3D, AuthoriseEncrypted, AuthoriseResponse,
    PAYMENT_API_VERSION, PAYMENT_SERVICE,
};

use crate::client::AdyenClient;

const AUTHORISE: &str = "authorise";
const AUTHORISE_3D: &str = "authorise3d";

pub struct PaymentGateway<'a> {
    client: &'a AdyenClient,
}

impl<'a> PaymentGateway<'a> {
    pub(crate) fn new(client: &'a AdyenClient) -> Self {
        Self { client }
    }

    /// Authorise a payment with plain card details.
    pub async fn authorise(&self, req: &Authorise) -> Result<AuthoriseResponse, AdyenError> {
        self.client.execute(&self.url(AUTHORISE), req).await
    }

    /// Authorise a payment with a client-side encrypted card.
    pub async fn authorise_encrypted(
        &self,
        req: &AuthoriseEncrypted,
    ) -> Result<AuthoriseResponse, AdyenError> {
        self.client.execute(&self.url(AUTHORISE), req).await
    }

    /// Complete a 3-D Secure authorisation.
    pub async fn authorise_3d(&self, req: &Authorise3D) -> Result<AuthoriseResponse, AdyenError> {
        self.client.execute(&self.url(AUTHORISE_3D), req).await
    }

    fn url(&self, method: &str) -> String {
        self.client
            .api_url(PAYMENT_SERVICE, PAYMENT_API_VERSION, method)
    }
}
