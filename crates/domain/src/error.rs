//! Domain error types.

use thiserror::Error;

/// An invariant was violated by a constructor or mutator.
///
/// The display text of each variant is part of the public contract and is
/// surfaced to callers verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Id is required")]
    IdRequired,

    #[error("Name is required")]
    NameRequired,

    #[error("Price is required")]
    PriceRequired,

    #[error("CustomerId is required")]
    CustomerIdRequired,

    #[error("Items are required")]
    ItemsRequired,

    #[error("Street is required")]
    StreetRequired,

    #[error("Number is required")]
    NumberRequired,

    #[error("Zip is required")]
    ZipRequired,

    #[error("City is required")]
    CityRequired,

    /// A renamed customer must have at least a first and a last name.
    #[error("Invalid name, names must contain at least first and last name.")]
    IncompleteName,

    #[error("Name is required to activate a customer")]
    NameRequiredToActivate,

    #[error("Id is required to activate a customer")]
    IdRequiredToActivate,

    #[error("Address is required to activate a customer")]
    AddressRequiredToActivate,

    /// Checkout was attempted with an empty cart.
    #[error("Order must have at least one item")]
    NoItemsToPlace,
}

/// Result type for domain operations.
pub type Result<T> = std::result::Result<T, ValidationError>;
