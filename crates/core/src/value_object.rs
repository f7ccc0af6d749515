//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity: two of them with the same attribute values
/// are equal. Slot snapshots are value objects; slots themselves are not, they
/// are mutable and carry listeners.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
