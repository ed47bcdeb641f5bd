//! Stored record shapes and their mapping to domain entities.

use common::EntityId;
use domain::{Address, Customer, Money, Order, OrderItem, Product, ValidationError};
use serde::{Deserialize, Serialize};

/// A flattened, storable form of a domain entity.
///
/// Rebuilding the entity goes through its constructors, so a record that
/// violates an invariant is rejected on read.
pub trait Record: Clone + Send + Sync + 'static {
    /// The entity this record stores.
    type Entity: Send + Sync + 'static;

    /// Entity label used in error messages and metrics.
    const ENTITY: &'static str;

    fn id(&self) -> &EntityId;

    fn from_entity(entity: &Self::Entity) -> Self;

    fn into_entity(self) -> Result<Self::Entity, ValidationError>;
}

/// Customer row with the address columns inlined.
///
/// Address columns are all `None` for a customer without an address and all
/// `Some` otherwise; anything in between is rejected on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub id: EntityId,
    pub name: String,
    pub street: Option<String>,
    pub number: Option<i32>,
    pub zipcode: Option<String>,
    pub city: Option<String>,
    pub active: bool,
    pub reward_points: i64,
}

impl Record for CustomerRecord {
    type Entity = Customer;

    const ENTITY: &'static str = "Customer";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn from_entity(customer: &Customer) -> Self {
        let address = customer.address();
        Self {
            id: customer.id().clone(),
            name: customer.name().to_string(),
            street: address.map(|a| a.street().to_string()),
            number: address.map(Address::number),
            zipcode: address.map(|a| a.zip().to_string()),
            city: address.map(|a| a.city().to_string()),
            active: customer.is_active(),
            reward_points: customer.reward_points(),
        }
    }

    fn into_entity(self) -> Result<Customer, ValidationError> {
        let mut customer = Customer::new(self.id, self.name)?;

        match (self.street, self.number, self.zipcode, self.city) {
            (None, None, None, None) => {}
            // A partial address fails on its first missing column.
            (street, number, zip, city) => {
                let address = Address::new(
                    street.unwrap_or_default(),
                    number.unwrap_or_default(),
                    zip.unwrap_or_default(),
                    city.unwrap_or_default(),
                )?;
                customer.change_address(address);
            }
        }
        if self.active {
            customer.activate()?;
        }
        customer.add_reward_points(self.reward_points);

        Ok(customer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: EntityId,
    pub name: String,
    pub price: Money,
}

impl Record for ProductRecord {
    type Entity = Product;

    const ENTITY: &'static str = "Product";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn from_entity(product: &Product) -> Self {
        Self {
            id: product.id().clone(),
            name: product.name().to_string(),
            price: product.price(),
        }
    }

    fn into_entity(self) -> Result<Product, ValidationError> {
        Product::new(self.id, self.name, self.price)
    }
}

/// Order row with its item rows embedded.
///
/// `total` is written for readers of the stored data and ignored on load;
/// the entity always derives it from the items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: EntityId,
    pub customer_id: EntityId,
    pub total: Money,
    pub items: Vec<OrderItemRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItemRecord {
    pub id: EntityId,
    pub name: String,
    pub price: Money,
    pub quantity: u32,
    pub order_id: EntityId,
    pub product_id: EntityId,
}

impl Record for OrderRecord {
    type Entity = Order;

    const ENTITY: &'static str = "Order";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn from_entity(order: &Order) -> Self {
        let items = order
            .items()
            .iter()
            .map(|item| OrderItemRecord {
                id: item.id().clone(),
                name: item.name().to_string(),
                price: item.price(),
                quantity: item.quantity(),
                order_id: order.id().clone(),
                product_id: item.product_id().clone(),
            })
            .collect();

        Self {
            id: order.id().clone(),
            customer_id: order.customer_id().clone(),
            total: order.total(),
            items,
        }
    }

    fn into_entity(self) -> Result<Order, ValidationError> {
        let items = self
            .items
            .into_iter()
            .map(|item| OrderItem::new(item.id, item.product_id, item.name, item.price, item.quantity))
            .collect();

        Order::new(self.id, self.customer_id, items)
    }
}
