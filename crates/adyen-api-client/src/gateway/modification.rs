use adyen::{
    AdjustAuthorisation, AdyenError, Cancel, Capture, ModificationResponse, Refund,
    TechnicalCancel, PAYMENT_API_VERSION, PAYMENT_SERVICE,
};

use crate::client::AdyenClient;

const CAPTURE: &str = "capture";
const CANCEL: &str = "cancel";
const CANCEL_OR_REFUND: &str = "cancelOrRefund";
const REFUND: &str = "refund";
const ADJUST_AUTHORISATION: &str = "adjustAuthorisation";
const TECHNICAL_CANCEL: &str = "technicalCancel";

/// Modifications are acknowledged synchronously; the outcome arrives later
/// as a notification.
pub struct ModificationGateway<'a> {
    client: &'a AdyenClient,
}

impl<'a> ModificationGateway<'a> {
    pub(crate) fn new(client: &'a AdyenClient) -> Self {
        Self { client }
    }

    pub async fn capture(&self, req: &Capture) -> Result<ModificationResponse, AdyenError> {
        self.client.execute(&self.url(CAPTURE), req).await
    }

    pub async fn cancel(&self, req: &Cancel) -> Result<ModificationResponse, AdyenError> {
        self.client.execute(&self.url(CANCEL), req).await
    }

    /// Cancel if not yet captured, refund otherwise.
    pub async fn cancel_or_refund(&self, req: &Cancel) -> Result<ModificationResponse, AdyenError> {
        self.client.execute(&self.url(CANCEL_OR_REFUND), req).await
    }

    pub async fn refund(&self, req: &Refund) -> Result<ModificationResponse, AdyenError> {
        self.client.execute(&self.url(REFUND), req).await
    }

    pub async fn adjust_authorisation(
        &self,
        req: &AdjustAuthorisation,
    ) -> Result<ModificationResponse, AdyenError> {
        self.client
            .execute(&self.url(ADJUST_AUTHORISATION), req)
            .await
    }

    pub async fn technical_cancel(
        &self,
        req: &TechnicalCancel,
    ) -> Result<ModificationResponse, AdyenError> {
        self.client.execute(&self.url(TECHNICAL_CANCEL), req).await
    }

    fn url(&self, method: &str) -> String {
        self.client
            .api_url(PAYMENT_SERVICE, PAYMENT_API_VERSION, method)
    }
}
