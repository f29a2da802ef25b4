//! `ordersync-core`: domain foundation building blocks.
//!
//! Pure domain primitives shared by the order, payment and processor crates.
//! Nothing in here performs IO.

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;

pub use aggregate::AggregateRoot;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{OrderId, OrderItemId, PaymentId};
