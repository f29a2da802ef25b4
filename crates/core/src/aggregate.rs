//! Aggregate root trait.

/// Aggregate root marker + minimal interface.
///
/// The order is the only aggregate here. Its version is the edit revision
/// assigned by the host framework; processors never bump it themselves.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;

    /// Monotonically increasing revision of the aggregate's state.
    fn version(&self) -> u64;
}
