use common::EntityId;
use serde::Serialize;

use crate::error::{Result, ValidationError};
use crate::validation::ensure;

use super::Address;

/// A customer of the store.
///
/// Starts inactive with no address and zero reward points. Activation
/// requires an address; deactivation always succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    id: EntityId,
    name: String,
    address: Option<Address>,
    active: bool,
    reward_points: i64,
}

impl Customer {
    /// Creates an inactive customer.
    ///
    /// Only non-emptiness is required here; the stricter first/last name
    /// rule applies to [`Customer::change_name`] alone.
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Result<Self> {
        let customer = Self {
            id: id.into(),
            name: name.into(),
            address: None,
            active: false,
            reward_points: 0,
        };

        ensure([
            (customer.name.is_empty(), ValidationError::NameRequired),
            (customer.id.is_empty(), ValidationError::IdRequired),
        ])?;

        Ok(customer)
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current address, if one was ever assigned.
    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn reward_points(&self) -> i64 {
        self.reward_points
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Renames the customer.
    ///
    /// The name must split on single spaces into at least two parts.
    pub fn change_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        ensure([(
            name.split(' ').count() <= 1,
            ValidationError::IncompleteName,
        )])?;

        self.name = name;
        Ok(())
    }

    /// Replaces the address, dropping the previous one.
    ///
    /// Publishing a `CustomerAddressChangedEvent` is left to the caller.
    pub fn change_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    /// Marks the customer active.
    ///
    /// Re-activating an active customer re-runs the checks and succeeds
    /// while they still hold.
    pub fn activate(&mut self) -> Result<()> {
        ensure([
            (self.name.is_empty(), ValidationError::NameRequiredToActivate),
            (self.id.is_empty(), ValidationError::IdRequiredToActivate),
            (
                self.address.is_none(),
                ValidationError::AddressRequiredToActivate,
            ),
        ])?;

        self.active = true;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Adds reward points. Negative amounts are applied as given.
    pub fn add_reward_points(&mut self, points: i64) {
        self.reward_points = self.reward_points.saturating_add(points);
    }
}
