use adyen::{
    AdyenError, RecurringDetailsRequest, RecurringDetailsResult, RecurringDisableRequest,
    RecurringDisableResponse, RECURRING_API_VERSION, RECURRING_SERVICE,
};

use crate::client::AdyenClient;

const LIST_RECURRING_DETAILS: &str = "listRecurringDetails";
const DISABLE: &str = "disable";

pub struct RecurringGateway<'a> {
    client: &'a AdyenClient,
}

impl<'a> RecurringGateway<'a> {
    pub(crate) fn new(client: &'a AdyenClient) -> Self {
        Self { client }
    }

    /// Stored payment details of a shopper.
    pub async fn list_recurring_details(
        &self,
        req: &RecurringDetailsRequest,
    ) -> Result<RecurringDetailsResult, AdyenError> {
        self.client
            .execute(&self.url(LIST_RECURRING_DETAILS), req)
            .await
    }

    pub async fn disable(
        &self,
        req: &RecurringDisableRequest,
    ) -> Result<RecurringDisableResponse, AdyenError> {
        self.client.execute(&self.url(DISABLE), req).await
    }

    fn url(&self, method: &str) -> String {
        self.client
            .api_url(RECURRING_SERVICE, RECURRING_API_VERSION, method)
    }
}
