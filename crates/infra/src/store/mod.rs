//! In-memory adapters for the processor ports (tests/dev).

pub mod in_memory;
pub mod quote;

pub use in_memory::{InMemoryEntityStore, InMemoryOrderItemStore, InMemoryPaymentStore, StoreError};
pub use quote::{InMemoryQuoteStore, QuoteSnapshot};
