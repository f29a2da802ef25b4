use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

use rust_decimal::Decimal;

use ordersync_core::{OrderId, OrderItemId};
use ordersync_processor::QuoteSynchronizer;
use ordersync_sales::Order;

use super::in_memory::StoreError;

/// What the quote looked like after the last sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteSnapshot {
    pub grand_total: Decimal,
    pub items: Vec<(OrderItemId, Decimal)>,
    pub syncs: u32,
}

/// Quote synchronizer that mirrors orders into in-memory quote snapshots.
#[derive(Debug, Default)]
pub struct InMemoryQuoteStore {
    quotes: RwLock<HashMap<OrderId, QuoteSnapshot>>,
    fail_next: AtomicBool,
}

impl InMemoryQuoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, order_id: OrderId) -> Option<QuoteSnapshot> {
        let quotes = self.quotes.read().ok()?;
        quotes.get(&order_id).cloned()
    }

    /// Make the next sync fail with [`StoreError::Injected`].
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }
}

impl QuoteSynchronizer for InMemoryQuoteStore {
    fn sync(&self, order: &Order) -> anyhow::Result<()> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(StoreError::Injected("quote").into());
        }

        let mut quotes = self
            .quotes
            .write()
            .map_err(|_| StoreError::Poisoned("quote"))?;
        let syncs = quotes.get(&order.id_typed()).map_or(0, |q| q.syncs) + 1;
        quotes.insert(
            order.id_typed(),
            QuoteSnapshot {
                grand_total: order.totals().grand_total,
                items: order
                    .items()
                    .iter()
                    .map(|item| (item.item_id(), item.qty_ordered()))
                    .collect(),
                syncs,
            },
        );
        tracing::debug!(order_id = %order.id_typed(), syncs, "quote synced");
        Ok(())
    }
}
