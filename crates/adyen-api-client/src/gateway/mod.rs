//! Per-API views over an [`AdyenClient`].

mod checkout;
mod hpp;
mod modification;
mod notification;
mod payment;
mod recurring;

pub use checkout::CheckoutGateway;
pub use hpp::HppGateway;
pub use modification::ModificationGateway;
pub use notification::NotificationGateway;
pub use payment::PaymentGateway;
pub use recurring::RecurringGateway;

use crate::client::AdyenClient;

impl AdyenClient {
    /// Authorisations.
    pub fn payment(&self) -> PaymentGateway<'_> {
        PaymentGateway::new(self)
    }

    /// Capture, cancel, refund and other changes to an authorisation.
    pub fn modification(&self) -> ModificationGateway<'_> {
        ModificationGateway::new(self)
    }

    /// Stored payment details.
    pub fn recurring(&self) -> RecurringGateway<'_> {
        RecurringGateway::new(self)
    }

    pub fn checkout(&self) -> CheckoutGateway<'_> {
        CheckoutGateway::new(self)
    }

    /// Hosted payment pages.
    pub fn hpp(&self) -> HppGateway<'_> {
        HppGateway::new(self)
    }

    /// Inbound notification validation.
    pub fn notifications(&self) -> NotificationGateway<'_> {
        NotificationGateway::new(self)
    }
}
