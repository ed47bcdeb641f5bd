use async_trait::async_trait;
use common::EntityId;

use crate::{RepositoryError, Result};

/// Core trait for repository implementations.
///
/// A repository stores snapshots of one entity type keyed by id.
/// All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait Repository<T: Send + Sync + 'static>: Send + Sync {
    /// Stores a new entity.
    ///
    /// Fails with `AlreadyExists` if the id is taken.
    async fn create(&self, entity: &T) -> Result<()>;

    /// Replaces the stored snapshot of an existing entity.
    ///
    /// Fails with `NotFound` if the id is unknown.
    async fn update(&self, entity: &T) -> Result<()>;

    /// Loads an entity by id.
    async fn find_by_id(&self, id: &EntityId) -> Result<T>;

    /// Loads every stored entity in insertion order.
    ///
    /// Returns an empty list when nothing is stored.
    async fn find_all(&self) -> Result<Vec<T>>;
}

/// Extension trait providing convenience methods for repositories.
#[async_trait]
pub trait RepositoryExt<T: Send + Sync + 'static>: Repository<T> {
    /// Checks if an entity with the id is stored.
    async fn exists(&self, id: &EntityId) -> Result<bool> {
        match self.find_by_id(id).await {
            Ok(_) => Ok(true),
            Err(RepositoryError::NotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Loads several entities, failing on the first unknown id.
    async fn find_many(&self, ids: &[EntityId]) -> Result<Vec<T>> {
        let mut found = Vec::with_capacity(ids.len());
        for id in ids {
            found.push(self.find_by_id(id).await?);
        }
        Ok(found)
    }
}

// Blanket implementation for all Repository implementations
impl<T: Send + Sync + 'static, R: Repository<T> + ?Sized> RepositoryExt<T> for R {}
