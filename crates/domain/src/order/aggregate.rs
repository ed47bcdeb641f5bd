//! Order aggregate implementation.

use common::EntityId;
use serde::Serialize;

use crate::error::{Result, ValidationError};
use crate::money::Money;
use crate::validation::ensure;

use super::OrderItem;

/// Order aggregate root.
///
/// Owns a non-empty, fixed list of line items. The customer is referenced
/// by id only and is not checked for existence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    id: EntityId,
    customer_id: EntityId,
    items: Vec<OrderItem>,
}

impl Order {
    /// Creates an order, checking id, customer id and items in that order.
    pub fn new(
        id: impl Into<EntityId>,
        customer_id: impl Into<EntityId>,
        items: Vec<OrderItem>,
    ) -> Result<Self> {
        let order = Self {
            id: id.into(),
            customer_id: customer_id.into(),
            items,
        };

        ensure([
            (order.id.is_empty(), ValidationError::IdRequired),
            (
                order.customer_id.is_empty(),
                ValidationError::CustomerIdRequired,
            ),
            (order.items.is_empty(), ValidationError::ItemsRequired),
        ])?;

        Ok(order)
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn customer_id(&self) -> &EntityId {
        &self.customer_id
    }

    /// Returns the line items in the order they were given.
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Sum of every line's price.
    ///
    /// Quantities are not multiplied in.
    pub fn total(&self) -> Money {
        self.items.iter().map(OrderItem::price).sum()
    }
}
