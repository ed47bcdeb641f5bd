//! Built-in event handlers.

use super::{Event, EventHandler};

/// Logs newly registered customers.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogWhenCustomerIsCreatedHandler;

impl EventHandler for LogWhenCustomerIsCreatedHandler {
    fn name(&self) -> &'static str {
        "LogWhenCustomerIsCreatedHandler"
    }

    fn handle(&self, event: &Event) {
        if let Event::CustomerCreated(e) = event {
            tracing::info!(
                customer_id = %e.customer.id(),
                name = e.customer.name(),
                "customer created"
            );
        }
    }
}

/// Logs the new address of a customer.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogWhenCustomerAddressChangesHandler;

impl EventHandler for LogWhenCustomerAddressChangesHandler {
    fn name(&self) -> &'static str {
        "LogWhenCustomerAddressChangesHandler"
    }

    fn handle(&self, event: &Event) {
        let Event::CustomerAddressChanged(e) = event else {
            return;
        };

        match e.customer.address() {
            Some(address) => tracing::info!(
                customer_id = %e.customer.id(),
                name = e.customer.name(),
                %address,
                "customer address changed"
            ),
            None => tracing::warn!(
                customer_id = %e.customer.id(),
                "address change event without an address"
            ),
        }
    }
}

/// Announces new catalog entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotifyWhenProductIsCreatedHandler;

impl EventHandler for NotifyWhenProductIsCreatedHandler {
    fn name(&self) -> &'static str {
        "NotifyWhenProductIsCreatedHandler"
    }

    fn handle(&self, event: &Event) {
        if let Event::ProductCreated(e) = event {
            tracing::info!(
                product_id = %e.product.id(),
                name = e.product.name(),
                price = %e.product.price(),
                "product created, notifying subscribers"
            );
        }
    }
}
