//! Collaborators supplied by the host framework.
//!
//! Every operation reports failure through `anyhow::Result` so any kind of
//! persistence or sync error can surface in the error notification.

use std::sync::Arc;

use ordersync_sales::{Order, OrderItem, Payment};

/// Persists mutated order items.
pub trait OrderItemRepository: Send + Sync {
    fn save(&self, item: &OrderItem) -> anyhow::Result<()>;
}

/// Persists mutated payment records.
pub trait PaymentRepository: Send + Sync {
    fn save(&self, payment: &Payment) -> anyhow::Result<()>;
}

/// Reconciles the quote an order was placed from.
pub trait QuoteSynchronizer: Send + Sync {
    fn sync(&self, order: &Order) -> anyhow::Result<()>;
}

impl<T> OrderItemRepository for Arc<T>
where
    T: OrderItemRepository + ?Sized,
{
    fn save(&self, item: &OrderItem) -> anyhow::Result<()> {
        (**self).save(item)
    }
}

impl<T> PaymentRepository for Arc<T>
where
    T: PaymentRepository + ?Sized,
{
    fn save(&self, payment: &Payment) -> anyhow::Result<()> {
        (**self).save(payment)
    }
}

impl<T> QuoteSynchronizer for Arc<T>
where
    T: QuoteSynchronizer + ?Sized,
{
    fn sync(&self, order: &Order) -> anyhow::Result<()> {
        (**self).sync(order)
    }
}
