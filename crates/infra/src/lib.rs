//! Infrastructure layer: in-memory adapters and caller-side wrappers.

pub mod dedup;
pub mod store;

mod integration_tests;

pub use dedup::DedupingSalesProcessor;
pub use store::{
    InMemoryEntityStore, InMemoryOrderItemStore, InMemoryPaymentStore, InMemoryQuoteStore,
    QuoteSnapshot, StoreError,
};
