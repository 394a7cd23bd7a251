use adyen::{AdyenError, PaymentMethods, PaymentMethodsResponse, CHECKOUT_API_VERSION};

use crate::client::AdyenClient;

const PAYMENT_METHODS: &str = "paymentMethods";

pub struct CheckoutGateway<'a> {
    client: &'a AdyenClient,
}

impl<'a> CheckoutGateway<'a> {
    pub(crate) fn new(client: &'a AdyenClient) -> Self {
        Self { client }
    }

    /// Payment methods available for the given country, amount and channel.
    pub async fn payment_methods(
        &self,
        req: &PaymentMethods,
    ) -> Result<PaymentMethodsResponse, AdyenError> {
        let url = self
            .client
            .credentials()
            .environment()
            .checkout_url(PAYMENT_METHODS, CHECKOUT_API_VERSION);
        self.client.execute(&url, req).await
    }
}
