//! Inventory slot module.
//!
//! A [`Slot`] holds zero or one item kind plus a bounded count. Slots are
//! mutated directly by their owner and notify listeners synchronously after
//! every successful change. [`move_between_slots`] and [`transfer_within`]
//! move stacks between two slots, merging or swapping as the kinds allow.

pub mod event;
pub mod item;
pub mod slot;
pub mod transfer;

pub use event::{SlotChange, SlotChanged, SlotSnapshot};
pub use item::ItemDefinition;
pub use slot::Slot;
pub use transfer::{TransferOutcome, move_between_slots, transfer_within};

pub use stashkit_core::{ContainerId, Item, SlotError, SlotResult};
pub use stashkit_events::{ListenerId, Subscription};
