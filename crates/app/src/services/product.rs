use std::sync::Arc;

use common::EntityId;
use domain::{EventDispatcher, Money, Product, ProductCreatedEvent, ProductService};
use repository::Repository;

use crate::error::Result;

/// Service for managing the product catalog.
pub struct ProductAppService<R> {
    repository: R,
    dispatcher: Arc<EventDispatcher>,
}

impl<R: Repository<Product>> ProductAppService<R> {
    pub fn new(repository: R, dispatcher: Arc<EventDispatcher>) -> Self {
        Self {
            repository,
            dispatcher,
        }
    }

    /// Adds a product to the catalog.
    #[tracing::instrument(skip(self))]
    pub async fn create(&self, id: EntityId, name: String, price: Money) -> Result<Product> {
        let product = Product::new(id, name, price)?;
        self.repository.create(&product).await?;

        self.dispatcher
            .notify(&ProductCreatedEvent::new(&product).into());
        Ok(product)
    }

    #[tracing::instrument(skip(self))]
    pub async fn change_price(&self, id: &EntityId, price: Money) -> Result<Product> {
        let mut product = self.repository.find_by_id(id).await?;
        product.change_price(price)?;
        self.repository.update(&product).await?;
        Ok(product)
    }

    /// Raises every catalog price by `percentage` percent.
    ///
    /// Nothing is stored unless every new price is valid.
    #[tracing::instrument(skip(self))]
    pub async fn increase_prices(&self, percentage: i64) -> Result<Vec<Product>> {
        let mut products = self.repository.find_all().await?;
        ProductService::increase_price(&mut products, percentage)?;

        for product in &products {
            self.repository.update(product).await?;
        }
        tracing::info!(count = products.len(), percentage, "catalog prices increased");
        Ok(products)
    }

    pub async fn get(&self, id: &EntityId) -> Result<Product> {
        Ok(self.repository.find_by_id(id).await?)
    }

    pub async fn list(&self) -> Result<Vec<Product>> {
        Ok(self.repository.find_all().await?)
    }
}
