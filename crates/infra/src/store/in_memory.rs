use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use thiserror::Error;

use ordersync_core::Entity;
use ordersync_processor::{OrderItemRepository, PaymentRepository};
use ordersync_sales::{OrderItem, Payment};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Failure armed with `fail_next` (fault injection for tests).
    #[error("injected failure in {0} store")]
    Injected(&'static str),

    /// Internal lock poisoning.
    #[error("{0} store lock poisoned")]
    Poisoned(&'static str),
}

/// In-memory entity store keyed by entity id.
///
/// Saves are upserts. `fail_next` arms a one-shot failure for the next save.
#[derive(Debug)]
pub struct InMemoryEntityStore<E: Entity> {
    name: &'static str,
    inner: RwLock<HashMap<E::Id, E>>,
    saves: AtomicUsize,
    fail_next: AtomicBool,
}

pub type InMemoryOrderItemStore = InMemoryEntityStore<OrderItem>;
pub type InMemoryPaymentStore = InMemoryEntityStore<Payment>;

impl<E> InMemoryEntityStore<E>
where
    E: Entity + Clone,
{
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            inner: RwLock::new(HashMap::new()),
            saves: AtomicUsize::new(0),
            fail_next: AtomicBool::new(false),
        }
    }

    pub fn get(&self, id: &E::Id) -> Option<E> {
        let map = self.inner.read().ok()?;
        map.get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|map| map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of successful saves since creation.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Make the next save fail with [`StoreError::Injected`].
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    fn upsert(&self, entity: &E) -> Result<(), StoreError> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(StoreError::Injected(self.name));
        }

        let mut map = self
            .inner
            .write()
            .map_err(|_| StoreError::Poisoned(self.name))?;
        map.insert(entity.id().clone(), entity.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

impl Default for InMemoryOrderItemStore {
    fn default() -> Self {
        Self::new("order item")
    }
}

impl Default for InMemoryPaymentStore {
    fn default() -> Self {
        Self::new("payment")
    }
}

impl OrderItemRepository for InMemoryOrderItemStore {
    fn save(&self, item: &OrderItem) -> anyhow::Result<()> {
        self.upsert(item)?;
        Ok(())
    }
}

impl PaymentRepository for InMemoryPaymentStore {
    fn save(&self, payment: &Payment) -> anyhow::Result<()> {
        self.upsert(payment)?;
        Ok(())
    }
}
