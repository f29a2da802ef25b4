//! Edited sales orders: line items, totals, payment record, removal maps.
//!
//! Pure domain state and deterministic mutations (no IO). Persisting the
//! results is the caller's job.

pub mod order;
pub mod payment;
pub mod removal;

pub use order::{Order, OrderItem, OrderTotals};
pub use payment::Payment;
pub use removal::{RemovalMap, merge_removals};
