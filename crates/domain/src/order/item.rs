use common::EntityId;
use serde::Serialize;

use crate::money::Money;

/// A line of an order.
///
/// Name and price are copied from the product when the line is created and
/// do not follow later product changes. `price` is the line's contribution
/// to the order total; `quantity` is carried alongside but not multiplied in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderItem {
    id: EntityId,
    product_id: EntityId,
    name: String,
    price: Money,
    quantity: u32,
}

impl OrderItem {
    /// Creates a line item. Values are stored as given.
    pub fn new(
        id: impl Into<EntityId>,
        product_id: impl Into<EntityId>,
        name: impl Into<String>,
        price: Money,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            product_id: product_id.into(),
            name: name.into(),
            price,
            quantity,
        }
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn product_id(&self) -> &EntityId {
        &self.product_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}
