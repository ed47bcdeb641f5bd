//! Application layer for the storefront.
//!
//! Wires the domain core to repositories and the event dispatcher and
//! exposes services for customers, products and checkout.

pub mod config;
pub mod error;
pub mod services;

use std::sync::Arc;

use domain::EventDispatcher;
use repository::{CustomerRepository, OrderRepository, ProductRepository};

pub use config::{Config, LogFormat};
pub use error::{AppError, Result};
pub use services::{CartLine, CheckoutService, CustomerAppService, ProductAppService};

/// The set of services backed by in-memory repositories.
pub struct Storefront {
    pub customers: CustomerAppService<CustomerRepository>,
    pub products: ProductAppService<ProductRepository>,
    pub checkout: CheckoutService<CustomerRepository, ProductRepository, OrderRepository>,
}

impl Storefront {
    /// Creates services over fresh in-memory repositories, publishing events
    /// through `dispatcher`.
    pub fn in_memory(config: &Config, dispatcher: Arc<EventDispatcher>) -> Self {
        let customers = CustomerRepository::new();
        let products = ProductRepository::new();
        let orders = OrderRepository::new();

        Self {
            customers: CustomerAppService::new(customers.clone(), Arc::clone(&dispatcher)),
            products: ProductAppService::new(products.clone(), dispatcher),
            checkout: CheckoutService::new(
                customers,
                products,
                orders,
                config.reward_points_divisor,
            ),
        }
    }
}

/// Creates services over in-memory repositories with the built-in event
/// handlers registered.
pub fn create_default_storefront(config: &Config) -> Storefront {
    Storefront::in_memory(config, Arc::new(EventDispatcher::with_default_handlers()))
}
