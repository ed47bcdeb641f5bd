//! Synchronous in-process event dispatch.

use std::collections::HashMap;
use std::sync::Arc;

use super::{
    CustomerAddressChangedEvent, CustomerCreatedEvent, DomainEvent, Event,
    LogWhenCustomerAddressChangesHandler, LogWhenCustomerIsCreatedHandler,
    NotifyWhenProductIsCreatedHandler, ProductCreatedEvent,
};

/// Reacts to events of the types it was registered for.
pub trait EventHandler: Send + Sync {
    /// Returns the name of this handler.
    fn name(&self) -> &'static str;

    /// Handles a single event.
    fn handle(&self, event: &Event);
}

/// Delivers events to the handlers registered for their type.
///
/// Handlers run synchronously on the caller's thread, in registration order.
/// Registration needs `&mut self`; share a fully wired dispatcher behind an
/// `Arc` once setup is done.
#[derive(Clone, Default)]
pub struct EventDispatcher {
    handlers: HashMap<&'static str, Vec<Arc<dyn EventHandler>>>,
}

impl EventDispatcher {
    /// Creates a dispatcher with no handlers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a dispatcher with the built-in logging handlers registered.
    pub fn with_default_handlers() -> Self {
        let mut dispatcher = Self::new();
        dispatcher.register(
            CustomerCreatedEvent::EVENT_TYPE,
            Arc::new(LogWhenCustomerIsCreatedHandler),
        );
        dispatcher.register(
            CustomerAddressChangedEvent::EVENT_TYPE,
            Arc::new(LogWhenCustomerAddressChangesHandler),
        );
        dispatcher.register(
            ProductCreatedEvent::EVENT_TYPE,
            Arc::new(NotifyWhenProductIsCreatedHandler),
        );
        dispatcher
    }

    /// Registers a handler for an event type.
    pub fn register(&mut self, event_type: &'static str, handler: Arc<dyn EventHandler>) {
        tracing::debug!(event_type, handler = handler.name(), "registering event handler");
        self.handlers.entry(event_type).or_default().push(handler);
    }

    /// Removes a previously registered handler instance.
    ///
    /// Returns true if the handler was registered for `event_type`.
    pub fn unregister(&mut self, event_type: &str, handler: &Arc<dyn EventHandler>) -> bool {
        let Some(registered) = self.handlers.get_mut(event_type) else {
            return false;
        };

        let before = registered.len();
        registered.retain(|h| !Arc::ptr_eq(h, handler));
        let removed = registered.len() != before;

        if registered.is_empty() {
            self.handlers.remove(event_type);
        }
        removed
    }

    /// Removes every handler for every event type.
    pub fn unregister_all(&mut self) {
        self.handlers.clear();
    }

    /// Returns the handlers registered for an event type.
    pub fn handlers(&self, event_type: &str) -> &[Arc<dyn EventHandler>] {
        self.handlers
            .get(event_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Delivers an event to every handler registered for its type.
    ///
    /// Returns the number of handlers that received the event.
    #[tracing::instrument(skip(self, event), fields(event_type = event.event_type()))]
    pub fn notify(&self, event: &Event) -> usize {
        let handlers = self.handlers(event.event_type());
        for handler in handlers {
            handler.handle(event);
        }

        metrics::counter!("domain_events_dispatched_total", "event_type" => event.event_type())
            .increment(1);
        tracing::debug!(handlers = handlers.len(), "event dispatched");

        handlers.len()
    }
}
