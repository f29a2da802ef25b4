//! Sales-object processors for edited orders.
//!
//! A processor reconciles an edited order with its related sales documents.
//! [`SyncOnlySalesProcessor`] leaves invoices, shipments and credit memos
//! untouched: it syncs the quote, returns removed quantities on the items and
//! rewrites the payment totals, reporting the outcome through notifications.

pub mod config;
pub mod error;
pub mod notification;
pub mod ports;
pub mod processor;
pub mod steps;
pub mod sync_only;

pub use config::{ConfigError, ProcessorCode, ProcessorConfig};
pub use error::ProcessingError;
pub use notification::{
    Notification, ProcessingCompleted, ProcessingFailed, ProcessingStarted, SalesObjectEvent,
};
pub use ports::{OrderItemRepository, PaymentRepository, QuoteSynchronizer};
pub use processor::SalesProcessor;
pub use sync_only::SyncOnlySalesProcessor;
