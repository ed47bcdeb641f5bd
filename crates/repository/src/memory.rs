use std::sync::Arc;

use async_trait::async_trait;
use common::EntityId;
use tokio::sync::RwLock;

use crate::{Record, Repository, RepositoryError, Result};
use crate::record::{CustomerRecord, OrderRecord, ProductRecord};

/// In-memory repository implementation for testing and local runs.
///
/// Stores records in insertion order. Clones share the same storage.
pub struct InMemoryRepository<R> {
    records: Arc<RwLock<Vec<R>>>,
}

pub type CustomerRepository = InMemoryRepository<CustomerRecord>;
pub type ProductRepository = InMemoryRepository<ProductRecord>;
pub type OrderRepository = InMemoryRepository<OrderRecord>;

impl<R: Record> InMemoryRepository<R> {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Returns a copy of the stored records.
    pub async fn records(&self) -> Vec<R> {
        self.records.read().await.clone()
    }

    fn not_found(id: &EntityId) -> RepositoryError {
        RepositoryError::NotFound {
            entity: R::ENTITY,
            id: id.to_string(),
        }
    }
}

impl<R> Clone for InMemoryRepository<R> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<R> Default for InMemoryRepository<R> {
    fn default() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

fn record_operation(entity: &'static str, operation: &'static str) {
    metrics::counter!("repository_operations_total", "entity" => entity, "operation" => operation)
        .increment(1);
}

#[async_trait]
impl<R: Record> Repository<R::Entity> for InMemoryRepository<R> {
    async fn create(&self, entity: &R::Entity) -> Result<()> {
        let record = R::from_entity(entity);
        let mut records = self.records.write().await;

        if records.iter().any(|r| r.id() == record.id()) {
            return Err(RepositoryError::AlreadyExists {
                entity: R::ENTITY,
                id: record.id().to_string(),
            });
        }

        tracing::debug!(entity = R::ENTITY, id = %record.id(), "creating record");
        records.push(record);
        record_operation(R::ENTITY, "create");
        Ok(())
    }

    async fn update(&self, entity: &R::Entity) -> Result<()> {
        let record = R::from_entity(entity);
        let mut records = self.records.write().await;

        let slot = records
            .iter_mut()
            .find(|r| r.id() == record.id())
            .ok_or_else(|| Self::not_found(record.id()))?;

        tracing::debug!(entity = R::ENTITY, id = %record.id(), "updating record");
        *slot = record;
        record_operation(R::ENTITY, "update");
        Ok(())
    }

    async fn find_by_id(&self, id: &EntityId) -> Result<R::Entity> {
        let record = {
            let records = self.records.read().await;
            records
                .iter()
                .find(|r| r.id() == id)
                .cloned()
                .ok_or_else(|| Self::not_found(id))?
        };

        record_operation(R::ENTITY, "find_by_id");
        Ok(record.into_entity()?)
    }

    async fn find_all(&self) -> Result<Vec<R::Entity>> {
        let records = self.records.read().await.clone();
        record_operation(R::ENTITY, "find_all");

        records
            .into_iter()
            .map(|r| r.into_entity().map_err(RepositoryError::from))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{Money, Product};

    fn product(id: &str, price: i64) -> Product {
        Product::new(id, format!("Product {id}"), Money::from_dollars(price)).unwrap()
    }

    #[tokio::test]
    async fn create_and_find() {
        let repo = ProductRepository::new();
        repo.create(&product("1", 100)).await.unwrap();

        let found = repo.find_by_id(&"1".into()).await.unwrap();
        assert_eq!(found, product("1", 100));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn create_duplicate_fails() {
        let repo = ProductRepository::new();
        repo.create(&product("1", 100)).await.unwrap();

        let result = repo.create(&product("1", 200)).await;
        assert!(matches!(
            result,
            Err(RepositoryError::AlreadyExists { entity: "Product", .. })
        ));
    }

    #[tokio::test]
    async fn find_missing_reports_entity_and_id() {
        let repo = ProductRepository::new();
        let err = repo.find_by_id(&"456ABC".into()).await.unwrap_err();
        assert_eq!(err.to_string(), "Product not found with id: 456ABC");
    }

    #[tokio::test]
    async fn update_replaces_record() {
        let repo = ProductRepository::new();
        let mut p = product("1", 100);
        repo.create(&p).await.unwrap();

        p.change_name("Product 1 v2").unwrap();
        p.change_price(Money::from_dollars(200)).unwrap();
        repo.update(&p).await.unwrap();

        let found = repo.find_by_id(p.id()).await.unwrap();
        assert_eq!(found.name(), "Product 1 v2");
        assert_eq!(found.price(), Money::from_dollars(200));
    }

    #[tokio::test]
    async fn update_missing_fails() {
        let repo = ProductRepository::new();
        let result = repo.update(&product("1", 100)).await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn find_all_keeps_insertion_order() {
        let repo = ProductRepository::new();
        assert!(repo.find_all().await.unwrap().is_empty());

        repo.create(&product("b", 2)).await.unwrap();
        repo.create(&product("a", 1)).await.unwrap();

        let all = repo.find_all().await.unwrap();
        let ids: Vec<_> = all.iter().map(|p| p.id().as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn clones_share_storage() {
        let repo = ProductRepository::new();
        let other = repo.clone();
        repo.create(&product("1", 1)).await.unwrap();
        assert!(!other.is_empty().await);
    }
}
