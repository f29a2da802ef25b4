use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ordersync_core::{AggregateRoot, DomainError, DomainResult, Entity, OrderId, OrderItemId};

use crate::payment::Payment;
use crate::removal::{RemovalMap, merge_removals};

/// Order line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    item_id: OrderItemId,
    qty_ordered: Decimal,
}

impl OrderItem {
    pub fn new(item_id: OrderItemId, qty_ordered: Decimal) -> Self {
        Self {
            item_id,
            qty_ordered,
        }
    }

    pub fn item_id(&self) -> OrderItemId {
        self.item_id
    }

    pub fn qty_ordered(&self) -> Decimal {
        self.qty_ordered
    }

    pub fn set_qty_ordered(&mut self, qty: Decimal) {
        self.qty_ordered = qty;
    }
}

impl Entity for OrderItem {
    type Id = OrderItemId;

    fn id(&self) -> &Self::Id {
        &self.item_id
    }
}

/// Order totals in order currency and base currency.
///
/// Read-only inputs for payment synchronization; maintained by the host's
/// totals collector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub grand_total: Decimal,
    pub base_grand_total: Decimal,

    pub shipping_amount: Decimal,
    pub base_shipping_amount: Decimal,
    pub shipping_invoiced: Decimal,
    pub base_shipping_invoiced: Decimal,
    pub shipping_refunded: Decimal,
    pub base_shipping_refunded: Decimal,

    pub total_invoiced: Decimal,
    pub base_total_invoiced: Decimal,
    pub total_refunded: Decimal,
    pub base_total_refunded: Decimal,
    pub total_canceled: Decimal,
    pub base_total_canceled: Decimal,
    pub total_paid: Decimal,
    pub base_total_paid: Decimal,
}

/// Aggregate root: an edited sales order.
///
/// The host loads the order together with its edit state (removed and
/// decreased quantities) and its payment record. Processors only touch item
/// quantities and payment amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    version: u64,
    items: Vec<OrderItem>,
    removed_items: RemovalMap,
    decreased_items: RemovalMap,
    totals: OrderTotals,
    payment: Option<Payment>,
}

impl Order {
    /// Create an order with no items, zero totals and no payment.
    pub fn new(id: OrderId, version: u64) -> Self {
        Self {
            id,
            version,
            items: Vec::new(),
            removed_items: RemovalMap::new(),
            decreased_items: RemovalMap::new(),
            totals: OrderTotals::default(),
            payment: None,
        }
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn item_by_id(&self, item_id: OrderItemId) -> Option<&OrderItem> {
        self.items.iter().find(|item| item.item_id == item_id)
    }

    pub fn item_by_id_mut(&mut self, item_id: OrderItemId) -> Option<&mut OrderItem> {
        self.items.iter_mut().find(|item| item.item_id == item_id)
    }

    pub fn add_item(&mut self, item: OrderItem) {
        self.items.push(item);
    }

    pub fn totals(&self) -> &OrderTotals {
        &self.totals
    }

    pub fn set_totals(&mut self, totals: OrderTotals) {
        self.totals = totals;
    }

    pub fn payment(&self) -> Option<&Payment> {
        self.payment.as_ref()
    }

    pub fn set_payment(&mut self, payment: Payment) {
        self.payment = Some(payment);
    }

    /// Record that an item was removed from the order by the edit.
    pub fn record_removed_item(&mut self, item_id: OrderItemId, qty: Decimal) {
        self.removed_items.insert(item_id, qty);
    }

    /// Record that an item's quantity was decreased by the edit.
    pub fn record_decreased_item(&mut self, item_id: OrderItemId, qty: Decimal) {
        self.decreased_items.insert(item_id, qty);
    }

    pub fn removed_items(&self) -> &RemovalMap {
        &self.removed_items
    }

    pub fn decreased_items(&self) -> &RemovalMap {
        &self.decreased_items
    }

    pub fn has_removed_items(&self) -> bool {
        !self.removed_items.is_empty()
    }

    pub fn has_items_with_decreased_qty(&self) -> bool {
        !self.decreased_items.is_empty()
    }

    /// True when the edit took quantity off at least one item.
    pub fn has_returned_items(&self) -> bool {
        self.has_removed_items() || self.has_items_with_decreased_qty()
    }

    /// Removed and decreased quantities merged, removed taking precedence.
    pub fn items_to_return(&self) -> RemovalMap {
        merge_removals(&self.removed_items, &self.decreased_items)
    }

    /// Subtract `qty` from an item's ordered quantity.
    ///
    /// Returns the updated item, or `None` if the order has no such item. The
    /// result is not clamped: it goes negative when `qty` exceeds the current
    /// ordered quantity. A difference outside the `Decimal` range is an error
    /// and leaves the item unchanged.
    pub fn return_item_qty(
        &mut self,
        item_id: OrderItemId,
        qty: Decimal,
    ) -> DomainResult<Option<&OrderItem>> {
        let Some(item) = self.item_by_id_mut(item_id) else {
            return Ok(None);
        };
        item.qty_ordered = item
            .qty_ordered
            .checked_sub(qty)
            .ok_or(DomainError::QuantityOverflow(item_id))?;
        Ok(Some(&*item))
    }

    /// Overwrite the payment's amount fields from the current totals.
    ///
    /// Returns the synced payment, or `None` if the order has no payment.
    pub fn sync_payment_totals(&mut self) -> Option<&Payment> {
        let payment = self.payment.as_mut()?;
        payment.sync_from(&self.totals);
        Some(&*payment)
    }
}

impl AggregateRoot for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}
