//! Domain services spanning more than one entity.

use common::EntityId;

use crate::customer::Customer;
use crate::error::{Result, ValidationError};
use crate::money::Money;
use crate::order::{Order, OrderItem};
use crate::product::Product;

/// Reward points are the order total, in whole currency units, divided by
/// this value.
pub const DEFAULT_REWARD_POINTS_DIVISOR: i64 = 2;

/// Operations over orders.
pub struct OrderService;

impl OrderService {
    /// Sums the totals of several orders.
    pub fn total(orders: &[Order]) -> Money {
        orders.iter().map(Order::total).sum()
    }

    /// Places an order for `customer` and credits reward points.
    pub fn place_order(customer: &mut Customer, items: Vec<OrderItem>) -> Result<Order> {
        Self::place_order_with_divisor(customer, items, DEFAULT_REWARD_POINTS_DIVISOR)
    }

    /// Like [`OrderService::place_order`] with an explicit reward divisor.
    ///
    /// A divisor that is not positive is treated as the default.
    pub fn place_order_with_divisor(
        customer: &mut Customer,
        items: Vec<OrderItem>,
        divisor: i64,
    ) -> Result<Order> {
        if items.is_empty() {
            return Err(ValidationError::NoItemsToPlace);
        }

        let order = Order::new(EntityId::generate(), customer.id().clone(), items)?;

        let divisor = if divisor <= 0 {
            DEFAULT_REWARD_POINTS_DIVISOR
        } else {
            divisor
        };
        let points = order.total().dollars() / divisor;
        customer.add_reward_points(points);

        metrics::counter!("orders_placed_total").increment(1);
        tracing::debug!(order_id = %order.id(), customer_id = %customer.id(), points, "order placed");

        Ok(order)
    }
}

/// Operations over products.
pub struct ProductService;

impl ProductService {
    /// Raises every product's price by `percentage` percent.
    ///
    /// Stops at the first product whose new price is rejected; products
    /// before it keep their raised price.
    pub fn increase_price(products: &mut [Product], percentage: i64) -> Result<()> {
        for product in products.iter_mut() {
            let price = product.price().increased_by_percent(percentage);
            product.change_price(price)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: i64) -> OrderItem {
        OrderItem::new(id, "p1", "Item", Money::from_dollars(price), 1)
    }

    #[test]
    fn total_of_all_orders() {
        let order1 = Order::new("o1", "c1", vec![item("i1", 100), item("i2", 200)]).unwrap();
        let order2 = Order::new("o2", "c1", vec![item("i3", 200), item("i4", 200)]).unwrap();

        assert_eq!(
            OrderService::total(&[order1, order2]),
            Money::from_dollars(700)
        );
    }

    #[test]
    fn total_of_no_orders_is_zero() {
        assert_eq!(OrderService::total(&[]), Money::zero());
    }

    #[test]
    fn place_order_credits_half_the_total() {
        let mut customer = Customer::new("c1", "Customer 1").unwrap();
        let order =
            OrderService::place_order(&mut customer, vec![item("i1", 10), item("i2", 20)])
                .unwrap();

        assert_eq!(order.customer_id(), "c1");
        assert!(!order.id().is_empty());
        assert_eq!(order.total(), Money::from_dollars(30));
        assert_eq!(customer.reward_points(), 15);
    }

    #[test]
    fn place_order_rejects_empty_cart() {
        let mut customer = Customer::new("c1", "Customer 1").unwrap();
        assert_eq!(
            OrderService::place_order(&mut customer, vec![]),
            Err(ValidationError::NoItemsToPlace)
        );
        assert_eq!(customer.reward_points(), 0);
    }

    #[test]
    fn custom_divisor() {
        let mut customer = Customer::new("c1", "Customer 1").unwrap();
        OrderService::place_order_with_divisor(&mut customer, vec![item("i1", 30)], 3).unwrap();
        assert_eq!(customer.reward_points(), 10);

        OrderService::place_order_with_divisor(&mut customer, vec![item("i1", 30)], 0).unwrap();
        assert_eq!(customer.reward_points(), 25);
    }

    #[test]
    fn negative_divisor_uses_default() {
        let mut customer = Customer::new("c1", "Customer 1").unwrap();
        OrderService::place_order_with_divisor(&mut customer, vec![item("i1", 10)], -2).unwrap();
        assert_eq!(customer.reward_points(), 5);
    }

    #[test]
    fn increase_price_of_all_products() {
        let mut products = vec![
            Product::new("p1", "Product 1", Money::from_dollars(10)).unwrap(),
            Product::new("p2", "Product 2", Money::from_dollars(20)).unwrap(),
        ];

        ProductService::increase_price(&mut products, 100).unwrap();

        assert_eq!(products[0].price(), Money::from_dollars(20));
        assert_eq!(products[1].price(), Money::from_dollars(40));
    }

    #[test]
    fn increase_price_rejects_non_positive_result() {
        let mut products = vec![Product::new("p1", "Product 1", Money::from_dollars(10)).unwrap()];

        assert_eq!(
            ProductService::increase_price(&mut products, -100),
            Err(ValidationError::PriceRequired)
        );
        assert_eq!(products[0].price(), Money::from_dollars(10));
    }
}
