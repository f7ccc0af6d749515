//! Item capability contract: what a slot needs to know about the things it stores.

/// A storable item kind.
///
/// Implemented by the item catalog, consumed by slots. The slot trusts the
/// implementation: a `max_stack_amount` of zero on a finite item simply means
/// nothing can ever be stored.
pub trait Item {
    /// Kind equality (not instance equality).
    ///
    /// Two separately allocated definitions of "wood" are the same kind.
    fn is_same_kind(&self, other: &Self) -> bool;

    /// Upper bound on units per slot. Ignored when [`Item::is_infinite_stack`] is true.
    fn max_stack_amount(&self) -> u32;

    /// Whether slots holding this item have no upper bound.
    fn is_infinite_stack(&self) -> bool;

    /// Returns `true` if a stack of `amount` units of this item fits in one slot.
    fn fits(&self, amount: u32) -> bool {
        self.is_infinite_stack() || amount <= self.max_stack_amount()
    }
}
