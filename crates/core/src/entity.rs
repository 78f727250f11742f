//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// A pantry item keeps its identity (its normalized key) while its quantity
/// changes over time.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
