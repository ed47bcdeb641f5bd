//! Order aggregate and its line items.

mod aggregate;
mod item;

pub use aggregate::Order;
pub use item::OrderItem;
