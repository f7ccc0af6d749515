/// A domain-agnostic change event.
///
/// Events are facts: they describe a state change that already happened and
/// are never mutated after being published.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "inventory.slot.stored").
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn version(&self) -> u32;
}
