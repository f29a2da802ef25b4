use ordersync_sales::Order;

/// Pluggable policy for reconciling sales documents after an order edit.
///
/// Callers treat `false` from [`update_sales_objects`](Self::update_sales_objects)
/// as "processing failed"; the details travel in the error notification.
pub trait SalesProcessor: Send + Sync {
    /// Stable code identifying the processor (used as notification subject).
    fn code(&self) -> &'static str;

    /// Reconcile the order's sales objects. Never panics on collaborator
    /// failures and never returns an error: failures become `false`.
    fn update_sales_objects(&self, order: Option<&mut Order>) -> bool;

    fn apply(&self, order: &mut Order) -> bool {
        self.update_sales_objects(Some(order))
    }

    /// Whether the order must go through a processor that creates or adjusts
    /// invoices, shipments or credit memos.
    fn needs_processing(&self, order: &Order) -> bool;
}

impl<T> SalesProcessor for Box<T>
where
    T: SalesProcessor + ?Sized,
{
    fn code(&self) -> &'static str {
        (**self).code()
    }

    fn update_sales_objects(&self, order: Option<&mut Order>) -> bool {
        (**self).update_sales_objects(order)
    }

    fn apply(&self, order: &mut Order) -> bool {
        (**self).apply(order)
    }

    fn needs_processing(&self, order: &Order) -> bool {
        (**self).needs_processing(order)
    }
}
