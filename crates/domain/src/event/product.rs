use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::product::Product;

use super::DomainEvent;

/// Raised after a product is added to the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct ProductCreatedEvent {
    pub occurred_at: DateTime<Utc>,
    pub product: Product,
}

impl ProductCreatedEvent {
    pub const EVENT_TYPE: &'static str = "ProductCreatedEvent";

    pub fn new(product: &Product) -> Self {
        Self {
            occurred_at: Utc::now(),
            product: product.clone(),
        }
    }
}

impl DomainEvent for ProductCreatedEvent {
    fn event_type(&self) -> &'static str {
        Self::EVENT_TYPE
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}
