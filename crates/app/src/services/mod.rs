//! Application services.
//!
//! Each service loads entities from a repository, calls the domain, stores
//! the result and publishes the matching domain event. Calls on the same
//! entity are not serialized here; callers that share a service across
//! tasks must not mutate one entity concurrently.

mod checkout;
mod customer;
mod product;

pub use checkout::{CartLine, CheckoutService};
pub use customer::CustomerAppService;
pub use product::ProductAppService;
