//! Pipeline steps of a sync-only run.
//!
//! Each step takes the order and the collaborator it needs and either
//! succeeds or returns the [`ProcessingError`] that ends the run. The driver in
//! [`crate::sync_only`] composes them and owns failure handling.

use rust_decimal::Decimal;

use ordersync_sales::{Order, OrderItem};

use crate::error::ProcessingError;
use crate::ports::{OrderItemRepository, PaymentRepository, QuoteSynchronizer};

/// Reconcile the order's quote.
pub fn sync_quote<Q>(quotes: &Q, order: &Order) -> Result<(), ProcessingError>
where
    Q: QuoteSynchronizer + ?Sized,
{
    quotes.sync(order).map_err(ProcessingError::QuoteSync)
}

/// Take removed and decreased quantities off the ordered quantity of each
/// affected item and persist it.
///
/// No-op unless the edit removed items or decreased quantities. Ids without a
/// matching item are skipped. Returns the number of items saved.
pub fn return_items<I>(items: &I, order: &mut Order) -> Result<usize, ProcessingError>
where
    I: OrderItemRepository + ?Sized,
{
    if !order.has_returned_items() {
        return Ok(0);
    }

    let to_return = order.items_to_return();
    let mut saved = 0;

    for item_id in to_return.keys().copied() {
        let Some(own_id) = order.item_by_id(item_id).map(OrderItem::item_id) else {
            tracing::debug!(%item_id, "returned item not on order; skipping");
            continue;
        };

        let qty = to_return.get(&own_id).copied().unwrap_or(Decimal::ZERO);
        let item = match order.return_item_qty(own_id, qty) {
            Ok(Some(item)) => item,
            Ok(None) => continue,
            Err(_) => return Err(ProcessingError::QuantityOverflow { item_id: own_id }),
        };

        tracing::debug!(item_id = %own_id, %qty, qty_ordered = %item.qty_ordered(), "returned item quantity");
        items
            .save(item)
            .map_err(|cause| ProcessingError::ItemSave {
                item_id: own_id,
                cause,
            })?;
        saved += 1;
    }

    Ok(saved)
}

/// Overwrite the payment amounts from the order totals and persist the payment.
pub fn sync_payment<P>(payments: &P, order: &mut Order) -> Result<(), ProcessingError>
where
    P: PaymentRepository + ?Sized,
{
    let order_id = order.id_typed();
    let payment = order
        .sync_payment_totals()
        .ok_or(ProcessingError::MissingPayment(order_id))?;

    payments.save(payment).map_err(ProcessingError::PaymentSave)
}
