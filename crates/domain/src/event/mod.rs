//! Domain events and their dispatch.
//!
//! Entities never publish events themselves. Callers build an event after a
//! successful mutation and hand it to an [`EventDispatcher`].

mod customer;
mod dispatcher;
mod handlers;
mod product;

use chrono::{DateTime, Utc};
use serde::Serialize;

pub use customer::{CustomerAddressChangedEvent, CustomerCreatedEvent};
pub use dispatcher::{EventDispatcher, EventHandler};
pub use handlers::{
    LogWhenCustomerAddressChangesHandler, LogWhenCustomerIsCreatedHandler,
    NotifyWhenProductIsCreatedHandler,
};
pub use product::ProductCreatedEvent;

/// Trait for domain events.
///
/// Domain events represent facts that have happened in the domain.
/// They are immutable and should be named in past tense.
pub trait DomainEvent: Serialize + Send + Sync + Clone {
    /// Returns the event type name used to route the event to handlers.
    fn event_type(&self) -> &'static str;

    /// Returns the wall-clock time the event was recorded.
    fn occurred_at(&self) -> DateTime<Utc>;
}

/// Every event the domain can raise.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    CustomerCreated(CustomerCreatedEvent),
    CustomerAddressChanged(CustomerAddressChangedEvent),
    ProductCreated(ProductCreatedEvent),
}

impl DomainEvent for Event {
    fn event_type(&self) -> &'static str {
        match self {
            Event::CustomerCreated(e) => e.event_type(),
            Event::CustomerAddressChanged(e) => e.event_type(),
            Event::ProductCreated(e) => e.event_type(),
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            Event::CustomerCreated(e) => e.occurred_at(),
            Event::CustomerAddressChanged(e) => e.occurred_at(),
            Event::ProductCreated(e) => e.occurred_at(),
        }
    }
}

impl From<CustomerCreatedEvent> for Event {
    fn from(e: CustomerCreatedEvent) -> Self {
        Event::CustomerCreated(e)
    }
}

impl From<CustomerAddressChangedEvent> for Event {
    fn from(e: CustomerAddressChangedEvent) -> Self {
        Event::CustomerAddressChanged(e)
    }
}

impl From<ProductCreatedEvent> for Event {
    fn from(e: ProductCreatedEvent) -> Self {
        Event::ProductCreated(e)
    }
}
