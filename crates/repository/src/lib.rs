//! Repositories for storefront entities.
//!
//! Entities are flattened into record shapes on write and rebuilt through
//! their validating constructors on read.

pub mod error;
pub mod memory;
pub mod record;
pub mod store;

pub use error::{RepositoryError, Result};
pub use memory::{CustomerRepository, InMemoryRepository, OrderRepository, ProductRepository};
pub use record::{CustomerRecord, OrderItemRecord, OrderRecord, ProductRecord, Record};
pub use store::{Repository, RepositoryExt};
