//! Quantities taken off an edited order, keyed by item.

use indexmap::IndexMap;
use rust_decimal::Decimal;

use ordersync_core::OrderItemId;

/// Item id → quantity, iterated in insertion order.
pub type RemovalMap = IndexMap<OrderItemId, Decimal>;

/// Merge removed-item and decreased-item quantities into one removal map.
///
/// Removed entries come first, in their own order, followed by decreased
/// entries whose id was not already seen. When an id is in both maps the
/// removed quantity wins; the decreased quantity is discarded, never added.
pub fn merge_removals(removed: &RemovalMap, decreased: &RemovalMap) -> RemovalMap {
    let mut merged = removed.clone();
    for (item_id, qty) in decreased {
        merged.entry(*item_id).or_insert(*qty);
    }
    merged
}
