use common::EntityId;
use domain::{Customer, Order, OrderItem, OrderService, Product};
use repository::{Repository, RepositoryExt};

use crate::error::Result;

/// A product and the quantity requested for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub product_id: EntityId,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(product_id: impl Into<EntityId>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

/// Turns a customer's cart into a stored order.
pub struct CheckoutService<C, P, O> {
    customers: C,
    products: P,
    orders: O,
    reward_points_divisor: i64,
}

impl<C, P, O> CheckoutService<C, P, O>
where
    C: Repository<Customer>,
    P: Repository<Product>,
    O: Repository<Order>,
{
    pub fn new(customers: C, products: P, orders: O, reward_points_divisor: i64) -> Self {
        Self {
            customers,
            products,
            orders,
            reward_points_divisor,
        }
    }

    /// Places an order for the customer.
    ///
    /// Each line snapshots the product's current name and price. The
    /// customer's reward points are credited and stored with the order.
    #[tracing::instrument(skip(self, lines), fields(line_count = lines.len()))]
    pub async fn checkout(&self, customer_id: &EntityId, lines: &[CartLine]) -> Result<Order> {
        let mut customer = self.customers.find_by_id(customer_id).await?;

        let product_ids: Vec<EntityId> = lines.iter().map(|l| l.product_id.clone()).collect();
        let products = self.products.find_many(&product_ids).await?;

        let items = products
            .iter()
            .zip(lines)
            .map(|(product, line)| {
                OrderItem::new(
                    EntityId::generate(),
                    product.id(),
                    product.name(),
                    product.price(),
                    line.quantity,
                )
            })
            .collect();

        let order =
            OrderService::place_order_with_divisor(&mut customer, items, self.reward_points_divisor)?;

        // Credited points are stored before the order, so a stored order
        // always has its points behind it.
        self.customers.update(&customer).await?;
        self.orders.create(&order).await?;

        metrics::histogram!("checkout_order_total_cents").record(order.total().cents() as f64);

        tracing::info!(
            order_id = %order.id(),
            total = %order.total(),
            reward_points = customer.reward_points(),
            "order placed"
        );
        Ok(order)
    }

    pub async fn get(&self, id: &EntityId) -> Result<Order> {
        Ok(self.orders.find_by_id(id).await?)
    }

    pub async fn list(&self) -> Result<Vec<Order>> {
        Ok(self.orders.find_all().await?)
    }
}
