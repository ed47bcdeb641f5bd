use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::customer::Customer;

use super::DomainEvent;

/// Raised after a customer is registered.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerCreatedEvent {
    /// When the event was recorded.
    pub occurred_at: DateTime<Utc>,

    /// The customer as it was when registered.
    pub customer: Customer,
}

impl CustomerCreatedEvent {
    pub const EVENT_TYPE: &'static str = "CustomerCreatedEvent";

    pub fn new(customer: &Customer) -> Self {
        Self {
            occurred_at: Utc::now(),
            customer: customer.clone(),
        }
    }
}

impl DomainEvent for CustomerCreatedEvent {
    fn event_type(&self) -> &'static str {
        Self::EVENT_TYPE
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

/// Raised after a customer's address was replaced.
///
/// Carries a snapshot of the customer taken after the change; later
/// mutations of the customer are not reflected here.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerAddressChangedEvent {
    /// When the event was recorded.
    pub occurred_at: DateTime<Utc>,

    /// The customer with its new address.
    pub customer: Customer,
}

impl CustomerAddressChangedEvent {
    pub const EVENT_TYPE: &'static str = "CustomerAddressChangedEvent";

    pub fn new(customer: &Customer) -> Self {
        Self {
            occurred_at: Utc::now(),
            customer: customer.clone(),
        }
    }
}

impl DomainEvent for CustomerAddressChangedEvent {
    fn event_type(&self) -> &'static str {
        Self::EVENT_TYPE
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}
