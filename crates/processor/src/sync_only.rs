//! The sync-only processor: never touches invoices, shipments or credit memos.

use std::sync::Arc;

use chrono::Utc;

use ordersync_events::EventBus;
use ordersync_sales::Order;

use crate::config::ProcessorConfig;
use crate::error::ProcessingError;
use crate::notification::{
    Notification, ProcessingCompleted, ProcessingFailed, ProcessingStarted, SalesObjectEvent,
};
use crate::ports::{OrderItemRepository, PaymentRepository, QuoteSynchronizer};
use crate::processor::SalesProcessor;
use crate::steps;

pub const CODE: &str = "sync_only";

/// Processor that only syncs: quote, returned item quantities, payment totals.
///
/// One run is a fixed pipeline:
///
/// ```text
/// quote sync → before → return items → sync payment → after
/// ```
///
/// The first failing step ends the run; the driver publishes a single error
/// notification carrying the failure and reports `false`.
#[derive(Debug)]
pub struct SyncOnlySalesProcessor<Q, I, P, B> {
    quotes: Q,
    items: I,
    payments: P,
    bus: B,
    config: ProcessorConfig,
}

impl<Q, I, P, B> SyncOnlySalesProcessor<Q, I, P, B> {
    pub fn new(quotes: Q, items: I, payments: P, bus: B) -> Self {
        Self::with_config(quotes, items, payments, bus, ProcessorConfig::default())
    }

    pub fn with_config(quotes: Q, items: I, payments: P, bus: B, config: ProcessorConfig) -> Self {
        Self {
            quotes,
            items,
            payments,
            bus,
            config,
        }
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }
}

impl<Q, I, P, B> SyncOnlySalesProcessor<Q, I, P, B>
where
    Q: QuoteSynchronizer,
    I: OrderItemRepository,
    P: PaymentRepository,
    B: EventBus<Notification>,
{
    fn run(&self, order: &mut Order) -> Result<usize, ProcessingError> {
        steps::sync_quote(&self.quotes, order)?;

        self.publish(SalesObjectEvent::Before(ProcessingStarted {
            subject: CODE,
            order: order.clone(),
            occurred_at: Utc::now(),
        }));

        let returned = steps::return_items(&self.items, order)?;
        steps::sync_payment(&self.payments, order)?;

        self.publish(SalesObjectEvent::After(ProcessingCompleted {
            subject: CODE,
            order: order.clone(),
            occurred_at: Utc::now(),
        }));

        Ok(returned)
    }

    fn fail(&self, order: Option<&Order>, error: ProcessingError) {
        tracing::error!(error = %error, "sales object processing failed");

        self.publish(SalesObjectEvent::Error(ProcessingFailed {
            subject: CODE,
            order: order.cloned(),
            error: Arc::new(error),
            occurred_at: Utc::now(),
        }));
    }

    fn publish(&self, event: SalesObjectEvent) {
        let name = self.config.event_name(event.stage());
        tracing::debug!(notification = %name, "publishing notification");

        if let Err(err) = self.bus.publish(Notification {
            name: name.clone(),
            event,
        }) {
            tracing::warn!(notification = %name, error = ?err, "failed to publish notification");
        }
    }
}

impl<Q, I, P, B> SalesProcessor for SyncOnlySalesProcessor<Q, I, P, B>
where
    Q: QuoteSynchronizer,
    I: OrderItemRepository,
    P: PaymentRepository,
    B: EventBus<Notification>,
{
    fn code(&self) -> &'static str {
        CODE
    }

    fn update_sales_objects(&self, order: Option<&mut Order>) -> bool {
        let span = tracing::info_span!(
            "update_sales_objects",
            processor = CODE,
            order_id = tracing::field::Empty
        );
        let _guard = span.enter();

        let Some(order) = order else {
            self.fail(None, ProcessingError::MissingOrder);
            return false;
        };
        span.record("order_id", tracing::field::display(order.id_typed()));

        match self.run(order) {
            Ok(returned) => {
                tracing::info!(returned_items = returned, "sales objects synced");
                true
            }
            Err(error) => {
                self.fail(Some(&*order), error);
                false
            }
        }
    }

    fn needs_processing(&self, _order: &Order) -> bool {
        false
    }
}
