//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Order items and payments are entities owned by an order; they are looked up
/// and persisted by id.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
