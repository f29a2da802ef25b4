//! Event mechanics: the `Event` trait and a transport-agnostic pub/sub bus.
//!
//! Processors publish lifecycle notifications through an injected
//! [`EventBus`] instead of a process-wide dispatcher, so listeners are explicit
//! and tests can subscribe to exactly what a run emitted.

pub mod bus;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
