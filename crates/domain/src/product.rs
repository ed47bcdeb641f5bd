//! Catalog products.

use common::EntityId;
use serde::Serialize;

use crate::error::{Result, ValidationError};
use crate::money::Money;
use crate::validation::ensure;

/// A catalog item with a mutable name and price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    id: EntityId,
    name: String,
    price: Money,
}

impl Product {
    /// Creates a product, checking id, name and price in that order.
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>, price: Money) -> Result<Self> {
        let product = Self {
            id: id.into(),
            name: name.into(),
            price,
        };

        ensure([
            (product.id.is_empty(), ValidationError::IdRequired),
            (product.name.is_empty(), ValidationError::NameRequired),
            (!product.price.is_positive(), ValidationError::PriceRequired),
        ])?;

        Ok(product)
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        ensure([(name.is_empty(), ValidationError::NameRequired)])?;
        self.name = name;
        Ok(())
    }

    pub fn change_price(&mut self, price: Money) -> Result<()> {
        ensure([(!price.is_positive(), ValidationError::PriceRequired)])?;
        self.price = price;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product::new("1", "Product1", Money::from_dollars(2)).unwrap()
    }

    #[test]
    fn rejects_empty_id() {
        assert_eq!(
            Product::new("", "Product1", Money::zero()),
            Err(ValidationError::IdRequired)
        );
    }

    #[test]
    fn rejects_empty_name() {
        assert_eq!(
            Product::new("1", "", Money::zero()),
            Err(ValidationError::NameRequired)
        );
    }

    #[test]
    fn rejects_non_positive_price() {
        assert_eq!(
            Product::new("1", "Product1", Money::zero()),
            Err(ValidationError::PriceRequired)
        );
        assert_eq!(
            Product::new("1", "Product1", Money::from_dollars(-1)),
            Err(ValidationError::PriceRequired)
        );
    }

    #[test]
    fn accepts_valid_fields() {
        let product = product();
        assert_eq!(product.id(), "1");
        assert_eq!(product.name(), "Product1");
        assert_eq!(product.price(), Money::from_dollars(2));
    }

    #[test]
    fn change_name() {
        let mut product = product();
        product.change_name("Product2").unwrap();
        assert_eq!(product.name(), "Product2");
    }

    #[test]
    fn change_name_failure_keeps_previous_name() {
        let mut product = product();
        assert_eq!(product.change_name(""), Err(ValidationError::NameRequired));
        assert_eq!(product.name(), "Product1");
    }

    #[test]
    fn change_price() {
        let mut product = product();
        product.change_price(Money::from_dollars(10)).unwrap();
        assert_eq!(product.price(), Money::from_dollars(10));
    }

    #[test]
    fn change_price_failure_keeps_previous_price() {
        let mut product = product();
        assert_eq!(
            product.change_price(Money::from_dollars(-1)),
            Err(ValidationError::PriceRequired)
        );
        assert_eq!(product.price(), Money::from_dollars(2));
    }
}
