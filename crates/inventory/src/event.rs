use std::sync::Arc;

use serde::{Deserialize, Serialize};

use stashkit_core::{ContainerId, Item, ValueObject};
use stashkit_events::Event;

/// What kind of mutation produced a [`SlotChanged`] notification.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotChange {
    Stored,
    Removed,
    /// The slot became empty, either explicitly or because its amount reached zero.
    Cleared,
    AmountSet,
    /// End of a merge-transfer this slot took part in.
    Transferred,
    /// End of a swap this slot took part in.
    Swapped,
}

impl SlotChange {
    pub fn as_str(self) -> &'static str {
        match self {
            SlotChange::Stored => "stored",
            SlotChange::Removed => "removed",
            SlotChange::Cleared => "cleared",
            SlotChange::AmountSet => "amount_set",
            SlotChange::Transferred => "transferred",
            SlotChange::Swapped => "swapped",
        }
    }
}

/// Point-in-time copy of a slot's `(item, amount)` pair.
#[derive(Debug, PartialEq, Eq)]
pub struct SlotSnapshot<I> {
    pub item: Option<Arc<I>>,
    pub amount: u32,
}

impl<I> SlotSnapshot<I> {
    pub fn is_empty(&self) -> bool {
        self.item.is_none()
    }
}

impl<I> Clone for SlotSnapshot<I> {
    fn clone(&self) -> Self {
        Self {
            item: self.item.clone(),
            amount: self.amount,
        }
    }
}

impl<I: PartialEq + core::fmt::Debug> ValueObject for SlotSnapshot<I> {}

/// Notification published by a slot after a successful mutation.
#[derive(Debug)]
pub struct SlotChanged<I> {
    pub change: SlotChange,
    /// The slot's state after the change.
    pub snapshot: SlotSnapshot<I>,
    pub container: Option<ContainerId>,
}

impl<I> SlotChanged<I> {
    pub fn snapshot(&self) -> &SlotSnapshot<I> {
        &self.snapshot
    }
}

impl<I> Clone for SlotChanged<I> {
    fn clone(&self) -> Self {
        Self {
            change: self.change,
            snapshot: self.snapshot.clone(),
            container: self.container,
        }
    }
}

impl<I: Item + core::fmt::Debug + Send + Sync + 'static> Event for SlotChanged<I> {
    fn event_type(&self) -> &'static str {
        match self.change {
            SlotChange::Stored => "inventory.slot.stored",
            SlotChange::Removed => "inventory.slot.removed",
            SlotChange::Cleared => "inventory.slot.cleared",
            SlotChange::AmountSet => "inventory.slot.amount_set",
            SlotChange::Transferred => "inventory.slot.transferred",
            SlotChange::Swapped => "inventory.slot.swapped",
        }
    }

    fn version(&self) -> u32 {
        1
    }
}
