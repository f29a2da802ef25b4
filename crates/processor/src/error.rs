//! Processing failures.

use thiserror::Error;

use ordersync_core::{OrderId, OrderItemId};

/// Anything that stops a processor run.
///
/// Never returned to the processor's caller: the driver logs it, attaches it to
/// the error notification and reports `false`.
#[derive(Debug, Error)]
pub enum ProcessingError {
    /// The processor was invoked without an order.
    #[error("order is not set")]
    MissingOrder,

    /// The order has no payment record to sync.
    #[error("order {0} has no payment")]
    MissingPayment(OrderId),

    /// Returning the quantity would take the item outside the `Decimal` range.
    #[error("returned quantity of order item {item_id} out of range")]
    QuantityOverflow { item_id: OrderItemId },

    #[error("quote sync failed: {0}")]
    QuoteSync(anyhow::Error),

    #[error("failed to save order item {item_id}: {cause}")]
    ItemSave {
        item_id: OrderItemId,
        cause: anyhow::Error,
    },

    #[error("failed to save payment: {0}")]
    PaymentSave(anyhow::Error),
}
