//! Domain core for the storefront.
//!
//! This crate provides the entities and value objects of the store along
//! with the rules that keep them valid:
//! - `Address` and `Money` value objects
//! - `Product`, `Customer` and the `Order` aggregate with its `OrderItem`s
//! - `ValidationError`, raised by constructors and mutators
//! - domain events and a synchronous `EventDispatcher`
//! - domain services for checkout and bulk price changes
//!
//! Nothing here performs I/O. Persistence lives in the `repository` crate.

pub mod customer;
pub mod error;
pub mod event;
pub mod money;
pub mod order;
pub mod product;
pub mod service;

mod validation;

pub use customer::{Address, Customer};
pub use error::{Result, ValidationError};
pub use event::{
    CustomerAddressChangedEvent, CustomerCreatedEvent, DomainEvent, Event, EventDispatcher,
    EventHandler, ProductCreatedEvent,
};
pub use money::Money;
pub use order::{Order, OrderItem};
pub use product::Product;
pub use service::{DEFAULT_REWARD_POINTS_DIVISOR, OrderService, ProductService};
