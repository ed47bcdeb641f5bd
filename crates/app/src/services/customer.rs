use std::sync::Arc;

use common::EntityId;
use domain::{Address, Customer, CustomerAddressChangedEvent, CustomerCreatedEvent, EventDispatcher};
use repository::Repository;

use crate::error::Result;

/// Service for managing customers.
pub struct CustomerAppService<R> {
    repository: R,
    dispatcher: Arc<EventDispatcher>,
}

impl<R: Repository<Customer>> CustomerAppService<R> {
    pub fn new(repository: R, dispatcher: Arc<EventDispatcher>) -> Self {
        Self {
            repository,
            dispatcher,
        }
    }

    /// Registers a new, inactive customer.
    #[tracing::instrument(skip(self))]
    pub async fn register(&self, id: EntityId, name: String) -> Result<Customer> {
        let customer = Customer::new(id, name)?;
        self.repository.create(&customer).await?;

        self.dispatcher
            .notify(&CustomerCreatedEvent::new(&customer).into());
        Ok(customer)
    }

    /// Replaces a customer's address and publishes the change.
    #[tracing::instrument(skip(self))]
    pub async fn change_address(&self, id: &EntityId, address: Address) -> Result<Customer> {
        let mut customer = self.repository.find_by_id(id).await?;
        customer.change_address(address);
        self.repository.update(&customer).await?;

        self.dispatcher
            .notify(&CustomerAddressChangedEvent::new(&customer).into());
        Ok(customer)
    }

    #[tracing::instrument(skip(self))]
    pub async fn change_name(&self, id: &EntityId, name: String) -> Result<Customer> {
        let mut customer = self.repository.find_by_id(id).await?;
        customer.change_name(name)?;
        self.repository.update(&customer).await?;
        Ok(customer)
    }

    #[tracing::instrument(skip(self))]
    pub async fn activate(&self, id: &EntityId) -> Result<Customer> {
        let mut customer = self.repository.find_by_id(id).await?;
        customer.activate()?;
        self.repository.update(&customer).await?;
        Ok(customer)
    }

    #[tracing::instrument(skip(self))]
    pub async fn deactivate(&self, id: &EntityId) -> Result<Customer> {
        let mut customer = self.repository.find_by_id(id).await?;
        customer.deactivate();
        self.repository.update(&customer).await?;
        Ok(customer)
    }

    pub async fn get(&self, id: &EntityId) -> Result<Customer> {
        Ok(self.repository.find_by_id(id).await?)
    }

    pub async fn list(&self) -> Result<Vec<Customer>> {
        Ok(self.repository.find_all().await?)
    }
}
