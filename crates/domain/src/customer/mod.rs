//! Customer entity and its address value object.

mod address;
mod entity;

pub use address::Address;
pub use entity::Customer;
