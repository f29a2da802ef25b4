//! Caller-side guard against re-running a processor for the same edit.
//!
//! Processors subtract returned quantities on every run, so replaying an edit
//! after a partially persisted failure would subtract twice. This wrapper keeps
//! the latest successfully processed edit revision of each order.

use std::collections::HashMap;
use std::sync::Mutex;

use ordersync_core::{AggregateRoot, OrderId};
use ordersync_processor::SalesProcessor;
use ordersync_sales::Order;

/// Skips orders whose current revision already processed successfully.
///
/// One entry per order: a newer revision replaces the older one, and revisions
/// at or below the recorded one count as processed. Only successful runs are
/// remembered, so a failed revision is retried on the next call. That retry
/// still re-applies whatever the failed run persisted.
#[derive(Debug)]
pub struct DedupingSalesProcessor<P> {
    inner: P,
    processed: Mutex<HashMap<OrderId, u64>>,
}

impl<P> DedupingSalesProcessor<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            processed: Mutex::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    pub fn is_processed(&self, order: &Order) -> bool {
        self.processed
            .lock()
            .map(|latest| {
                latest
                    .get(&order.id_typed())
                    .is_some_and(|version| *version >= order.version())
            })
            .unwrap_or(false)
    }

    /// Number of orders with a recorded revision.
    pub fn tracked_orders(&self) -> usize {
        self.processed.lock().map(|latest| latest.len()).unwrap_or(0)
    }

    fn mark_processed(&self, order: &Order) {
        if let Ok(mut latest) = self.processed.lock() {
            let version = latest.entry(order.id_typed()).or_insert(order.version());
            *version = (*version).max(order.version());
        }
    }
}

impl<P> SalesProcessor for DedupingSalesProcessor<P>
where
    P: SalesProcessor,
{
    fn code(&self) -> &'static str {
        self.inner.code()
    }

    fn update_sales_objects(&self, order: Option<&mut Order>) -> bool {
        let Some(order) = order else {
            return self.inner.update_sales_objects(None);
        };

        if self.is_processed(order) {
            tracing::debug!(
                order_id = %order.id_typed(),
                version = order.version(),
                "edit revision already processed; skipping"
            );
            return true;
        }

        let ok = self.inner.update_sales_objects(Some(&mut *order));
        if ok {
            self.mark_processed(order);
        }
        ok
    }

    fn needs_processing(&self, order: &Order) -> bool {
        self.inner.needs_processing(order)
    }
}
