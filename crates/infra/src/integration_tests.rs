//! Integration tests for the full sync-only pipeline.
//!
//! Tests: Order edit → SyncOnlySalesProcessor → in-memory stores + bus
//!
//! Verifies:
//! - Item quantities and payment totals are persisted
//! - Failures surface only as `false` plus one error notification
//! - The dedup wrapper keeps replays from subtracting twice

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rust_decimal::Decimal;

    use ordersync_core::{OrderId, OrderItemId, PaymentId};
    use ordersync_events::{EventBus, InMemoryEventBus, Subscription};
    use ordersync_processor::{
        Notification, ProcessingError, ProcessorConfig, SalesObjectEvent, SalesProcessor,
        SyncOnlySalesProcessor,
    };
    use ordersync_sales::{Order, OrderItem, OrderTotals, Payment};

    use crate::dedup::DedupingSalesProcessor;
    use crate::store::{InMemoryOrderItemStore, InMemoryPaymentStore, InMemoryQuoteStore, StoreError};

    struct Harness {
        quotes: Arc<InMemoryQuoteStore>,
        items: Arc<InMemoryOrderItemStore>,
        payments: Arc<InMemoryPaymentStore>,
        bus: Arc<InMemoryEventBus<Notification>>,
    }

    impl Harness {
        fn new() -> Self {
            ordersync_observability::init();
            Self {
                quotes: Arc::new(InMemoryQuoteStore::new()),
                items: Arc::new(InMemoryOrderItemStore::default()),
                payments: Arc::new(InMemoryPaymentStore::default()),
                bus: Arc::new(InMemoryEventBus::new()),
            }
        }

        fn processor(&self) -> Box<dyn SalesProcessor> {
            Box::new(SyncOnlySalesProcessor::with_config(
                self.quotes.clone(),
                self.items.clone(),
                self.payments.clone(),
                self.bus.clone(),
                ProcessorConfig::default(),
            ))
        }

        fn subscribe(&self) -> Subscription<Notification> {
            self.bus.subscribe()
        }
    }

    fn qty(n: i64) -> Decimal {
        Decimal::from(n)
    }

    /// An order of three items where the edit removed `a` and decreased `b`.
    fn edited_order(version: u64) -> (Order, [OrderItemId; 3]) {
        let ids = [OrderItemId::new(), OrderItemId::new(), OrderItemId::new()];
        let mut order = Order::new(OrderId::new(), version);
        order.add_item(OrderItem::new(ids[0], qty(2)));
        order.add_item(OrderItem::new(ids[1], qty(5)));
        order.add_item(OrderItem::new(ids[2], qty(1)));
        order.record_removed_item(ids[0], qty(2));
        order.record_decreased_item(ids[1], qty(3));
        order.set_totals(OrderTotals {
            grand_total: Decimal::new(3_450, 2),
            base_grand_total: Decimal::new(3_450, 2),
            shipping_amount: Decimal::new(500, 2),
            base_shipping_amount: Decimal::new(500, 2),
            shipping_invoiced: Decimal::new(500, 2),
            total_invoiced: Decimal::new(6_900, 2),
            base_total_invoiced: Decimal::new(6_900, 2),
            total_paid: Decimal::new(6_900, 2),
            base_total_paid: Decimal::new(6_900, 2),
            ..OrderTotals::default()
        });
        order.set_payment(Payment::new(PaymentId::new()));
        (order, ids)
    }

    #[test]
    fn edited_order_persists_items_payment_and_quote() {
        let harness = Harness::new();
        let subscription = harness.subscribe();
        let processor = harness.processor();
        let (mut order, [a, b, c]) = edited_order(1);

        assert!(processor.apply(&mut order));

        assert_eq!(harness.items.get(&a).unwrap().qty_ordered(), qty(0));
        assert_eq!(harness.items.get(&b).unwrap().qty_ordered(), qty(2));
        assert!(harness.items.get(&c).is_none());
        assert_eq!(harness.items.save_count(), 2);

        let payment_id = order.payment().unwrap().payment_id;
        let stored = harness.payments.get(&payment_id).unwrap();
        assert_eq!(stored.amount_ordered, Decimal::new(3_450, 2));
        assert_eq!(stored.amount_paid, Decimal::new(6_900, 2));
        assert_eq!(stored.shipping_captured, Decimal::new(500, 2));

        // The quote is synced before items are adjusted.
        let quote = harness.quotes.get(order.id_typed()).unwrap();
        assert_eq!(quote.syncs, 1);
        assert_eq!(quote.items[0], (a, qty(2)));

        let kinds: Vec<_> = subscription.drain().into_iter().map(|n| n.event.stage()).collect();
        assert_eq!(kinds, vec!["before", "after"]);
    }

    #[test]
    fn payment_store_failure_is_reported_once() {
        let harness = Harness::new();
        let subscription = harness.subscribe();
        let processor = harness.processor();
        let (mut order, _) = edited_order(1);
        harness.payments.fail_next();

        assert!(!processor.apply(&mut order));

        let errors: Vec<_> = subscription
            .drain()
            .into_iter()
            .filter_map(|n| match n.event {
                SalesObjectEvent::Error(failed) => Some(failed),
                _ => None,
            })
            .collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].order.as_ref().map(Order::id_typed), Some(order.id_typed()));
        match &*errors[0].error {
            ProcessingError::PaymentSave(source) => {
                assert_eq!(
                    source.downcast_ref::<StoreError>(),
                    Some(&StoreError::Injected("payment"))
                );
            }
            other => panic!("Expected PaymentSave, got {other:?}"),
        }

        // Items were already persisted when the payment failed.
        assert_eq!(harness.items.save_count(), 2);
        assert!(harness.payments.is_empty());
    }

    #[test]
    fn rerun_without_dedup_subtracts_twice() {
        let harness = Harness::new();
        let processor = harness.processor();
        let (mut order, [a, _, _]) = edited_order(1);

        assert!(processor.apply(&mut order));
        assert!(processor.apply(&mut order));

        assert_eq!(harness.items.get(&a).unwrap().qty_ordered(), qty(-2));
    }

    #[test]
    fn dedup_skips_an_already_processed_revision() {
        let harness = Harness::new();
        let subscription = harness.subscribe();
        let processor = DedupingSalesProcessor::new(harness.processor());
        let (mut order, [a, _, _]) = edited_order(7);

        assert!(processor.apply(&mut order));
        assert!(processor.is_processed(&order));
        assert!(processor.apply(&mut order));

        assert_eq!(harness.items.get(&a).unwrap().qty_ordered(), qty(0));
        assert_eq!(harness.quotes.get(order.id_typed()).unwrap().syncs, 1);
        assert_eq!(subscription.drain().len(), 2);
    }

    #[test]
    fn dedup_retries_a_failed_revision() {
        let harness = Harness::new();
        let processor = DedupingSalesProcessor::new(harness.processor());
        let (mut order, _) = edited_order(3);
        harness.quotes.fail_next();

        assert!(!processor.apply(&mut order));
        assert!(!processor.is_processed(&order));

        assert!(processor.apply(&mut order));
        assert!(processor.is_processed(&order));
        assert_eq!(harness.quotes.get(order.id_typed()).unwrap().syncs, 1);
    }

    #[test]
    fn dedup_keeps_only_the_latest_revision_per_order() {
        let harness = Harness::new();
        let processor = DedupingSalesProcessor::new(harness.processor());
        let (first, ids) = edited_order(1);

        let mut next = first.clone();
        assert!(processor.apply(&mut next));

        let mut revised = Order::new(first.id_typed(), 2);
        revised.add_item(OrderItem::new(ids[1], qty(2)));
        revised.record_decreased_item(ids[1], qty(1));
        revised.set_payment(Payment::new(PaymentId::new()));
        assert!(processor.apply(&mut revised));

        assert_eq!(processor.tracked_orders(), 1);
        assert!(processor.is_processed(&revised));
        // An older revision replayed after a newer one is not run again.
        assert!(processor.is_processed(&first));
        assert_eq!(harness.quotes.get(first.id_typed()).unwrap().syncs, 2);
    }

    #[test]
    fn dedup_delegates_missing_order_and_classification() {
        let harness = Harness::new();
        let subscription = harness.subscribe();
        let processor = DedupingSalesProcessor::new(harness.processor());
        let (order, _) = edited_order(1);

        assert!(!processor.update_sales_objects(None));
        assert!(!processor.needs_processing(&order));
        assert_eq!(processor.code(), "sync_only");

        let notifications = subscription.drain();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].name, "process_sales_object_error");
    }
}
