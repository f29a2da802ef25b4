use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ordersync_core::{Entity, PaymentId};

use crate::order::OrderTotals;

/// Payment record of an order (one-to-one).
///
/// Every amount field mirrors an order total; `sync_from` rewrites all of them,
/// so any value set independently is discarded on the next sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub payment_id: PaymentId,

    pub amount_ordered: Decimal,
    pub base_amount_ordered: Decimal,
    pub amount_paid: Decimal,
    pub base_amount_paid: Decimal,
    pub base_amount_paid_online: Decimal,
    pub amount_authorized: Decimal,
    pub base_amount_authorized: Decimal,
    pub amount_refunded: Decimal,
    pub base_amount_refunded: Decimal,
    pub base_amount_refunded_online: Decimal,
    pub amount_canceled: Decimal,
    pub base_amount_canceled: Decimal,

    pub shipping_amount: Decimal,
    pub base_shipping_amount: Decimal,
    pub shipping_captured: Decimal,
    pub shipping_refunded: Decimal,
    pub base_shipping_refunded: Decimal,
}

impl Payment {
    /// A payment with every amount at zero.
    pub fn new(payment_id: PaymentId) -> Self {
        Self {
            payment_id,
            amount_ordered: Decimal::ZERO,
            base_amount_ordered: Decimal::ZERO,
            amount_paid: Decimal::ZERO,
            base_amount_paid: Decimal::ZERO,
            base_amount_paid_online: Decimal::ZERO,
            amount_authorized: Decimal::ZERO,
            base_amount_authorized: Decimal::ZERO,
            amount_refunded: Decimal::ZERO,
            base_amount_refunded: Decimal::ZERO,
            base_amount_refunded_online: Decimal::ZERO,
            amount_canceled: Decimal::ZERO,
            base_amount_canceled: Decimal::ZERO,
            shipping_amount: Decimal::ZERO,
            base_shipping_amount: Decimal::ZERO,
            shipping_captured: Decimal::ZERO,
            shipping_refunded: Decimal::ZERO,
            base_shipping_refunded: Decimal::ZERO,
        }
    }

    /// Overwrite every amount field from the order totals.
    ///
    /// Paid and authorized amounts follow the invoiced totals (except
    /// `base_amount_paid`, which follows `base_total_paid`); captured shipping
    /// follows invoiced shipping.
    pub fn sync_from(&mut self, totals: &OrderTotals) {
        self.amount_ordered = totals.grand_total;
        self.base_amount_ordered = totals.base_grand_total;

        self.amount_paid = totals.total_invoiced;
        self.base_amount_paid = totals.base_total_paid;
        self.base_amount_paid_online = totals.base_total_invoiced;
        self.amount_authorized = totals.total_invoiced;
        self.base_amount_authorized = totals.base_total_invoiced;

        self.amount_refunded = totals.total_refunded;
        self.base_amount_refunded = totals.base_total_refunded;
        self.base_amount_refunded_online = totals.base_total_refunded;

        self.amount_canceled = totals.total_canceled;
        self.base_amount_canceled = totals.base_total_canceled;

        self.shipping_amount = totals.shipping_amount;
        self.base_shipping_amount = totals.base_shipping_amount;
        self.shipping_captured = totals.shipping_invoiced;
        self.shipping_refunded = totals.shipping_refunded;
        self.base_shipping_refunded = totals.base_shipping_refunded;
    }
}

impl Entity for Payment {
    type Id = PaymentId;

    fn id(&self) -> &Self::Id {
        &self.payment_id
    }
}
