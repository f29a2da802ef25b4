//! Lifecycle notifications published by processors.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use ordersync_core::OrderId;
use ordersync_events::Event;
use ordersync_sales::Order;

use crate::error::ProcessingError;

/// Published before item adjustment starts (after the quote sync).
#[derive(Debug, Clone)]
pub struct ProcessingStarted {
    pub subject: &'static str,
    pub order: Order,
    pub occurred_at: DateTime<Utc>,
}

/// Published once items and payment were persisted.
#[derive(Debug, Clone)]
pub struct ProcessingCompleted {
    pub subject: &'static str,
    pub order: Order,
    pub occurred_at: DateTime<Utc>,
}

/// Published when any step failed.
#[derive(Debug, Clone)]
pub struct ProcessingFailed {
    pub subject: &'static str,
    /// Order as it was when the step failed; `None` when no order was given.
    pub order: Option<Order>,
    pub error: Arc<ProcessingError>,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub enum SalesObjectEvent {
    Before(ProcessingStarted),
    After(ProcessingCompleted),
    Error(ProcessingFailed),
}

impl SalesObjectEvent {
    /// Suffix appended to the configured notification prefix.
    pub fn stage(&self) -> &'static str {
        match self {
            SalesObjectEvent::Before(_) => "before",
            SalesObjectEvent::After(_) => "after",
            SalesObjectEvent::Error(_) => "error",
        }
    }

    pub fn subject(&self) -> &'static str {
        match self {
            SalesObjectEvent::Before(e) => e.subject,
            SalesObjectEvent::After(e) => e.subject,
            SalesObjectEvent::Error(e) => e.subject,
        }
    }

    pub fn order_id(&self) -> Option<OrderId> {
        match self {
            SalesObjectEvent::Before(e) => Some(e.order.id_typed()),
            SalesObjectEvent::After(e) => Some(e.order.id_typed()),
            SalesObjectEvent::Error(e) => e.order.as_ref().map(Order::id_typed),
        }
    }

    pub fn error(&self) -> Option<&ProcessingError> {
        match self {
            SalesObjectEvent::Error(e) => Some(&e.error),
            _ => None,
        }
    }
}

impl Event for SalesObjectEvent {
    fn event_type(&self) -> &'static str {
        match self {
            SalesObjectEvent::Before(_) => "sales_object.process.before",
            SalesObjectEvent::After(_) => "sales_object.process.after",
            SalesObjectEvent::Error(_) => "sales_object.process.error",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            SalesObjectEvent::Before(e) => e.occurred_at,
            SalesObjectEvent::After(e) => e.occurred_at,
            SalesObjectEvent::Error(e) => e.occurred_at,
        }
    }
}

/// A named notification as it travels on the bus.
///
/// `name` is `"{prefix}_{stage}"`, e.g. `process_sales_object_after`.
#[derive(Debug, Clone)]
pub struct Notification {
    pub name: String,
    pub event: SalesObjectEvent,
}
