//! Entity trait: identity that outlives attribute values.

/// Domain object with a stable identity.
///
/// Two entities with the same id are the same thing, even if other fields
/// differ (e.g. a product record loaded from two different catalog snapshots).
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
