use adyen::{validate_notification_signature, AdyenError, NotificationRequestItemData};

use crate::client::AdyenClient;

pub struct NotificationGateway<'a> {
    client: &'a AdyenClient,
}

impl<'a> NotificationGateway<'a> {
    pub(crate) fn new(client: &'a AdyenClient) -> Self {
        Self { client }
    }

    /// Check an item's `hmacSignature` against the client's HMAC key.
    pub fn validate(&self, item: &NotificationRequestItemData) -> Result<bool, AdyenError> {
        validate_notification_signature(item, self.client.credentials())
    }
}
