use std::fmt;
use std::sync::Arc;

use stashkit_core::{ContainerId, Item, SlotError, SlotResult};
use stashkit_events::{ChangeListeners, ListenerId, Subscription};

use crate::event::{SlotChange, SlotChanged, SlotSnapshot};

/// A single inventory slot: zero or one item kind plus a bounded count.
///
/// Invariants, held after every public call returns:
/// - `amount() == 0` if and only if `item()` is `None`
/// - a finite-stack item never exceeds its `max_stack_amount()`
/// - only one item kind at a time
///
/// Every successful mutator publishes exactly one [`SlotChanged`]. Rejected
/// calls return an error without touching state or listeners.
#[derive(Debug)]
pub struct Slot<I: Item> {
    item: Option<Arc<I>>,
    amount: u32,
    owning_container: Option<ContainerId>,
    listeners: ChangeListeners<SlotChanged<I>>,
}

impl<I: Item> Slot<I> {
    /// An empty slot that belongs to no container.
    pub fn new() -> Self {
        Self {
            item: None,
            amount: 0,
            owning_container: None,
            listeners: ChangeListeners::new(),
        }
    }

    /// An empty slot bound to `container`.
    pub fn in_container(container: ContainerId) -> Self {
        Self {
            owning_container: Some(container),
            ..Self::new()
        }
    }

    pub fn item(&self) -> Option<&Arc<I>> {
        self.item.as_ref()
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    pub fn is_empty(&self) -> bool {
        self.item.is_none()
    }

    pub fn owning_container(&self) -> Option<ContainerId> {
        self.owning_container
    }

    pub fn snapshot(&self) -> SlotSnapshot<I> {
        SlotSnapshot {
            item: self.item.clone(),
            amount: self.amount,
        }
    }

    /// Units that can still be added. `None` for an empty slot or an infinite stack.
    pub fn remaining_capacity(&self) -> Option<u32> {
        match &self.item {
            Some(item) if !item.is_infinite_stack() => {
                Some(item.max_stack_amount().saturating_sub(self.amount))
            }
            _ => None,
        }
    }

    pub fn is_full(&self) -> bool {
        self.remaining_capacity() == Some(0)
    }

    /// Dry run of [`Slot::store`].
    pub fn can_store(&self, item: &I, amount: u32) -> bool {
        self.check_store(item, amount).is_ok()
    }

    /// Add `amount` units of `item`.
    ///
    /// Fails with `InvalidArgument` for a zero amount or when the result would
    /// exceed a finite stack, and with `IncompatibleItem` when the slot holds a
    /// different kind.
    pub fn store(&mut self, item: Arc<I>, amount: u32) -> SlotResult<()> {
        let total = self
            .check_store(&item, amount)
            .map_err(|err| rejected("store", err))?;

        if self.item.is_none() {
            self.item = Some(item);
        }
        self.amount = total;
        self.notify(SlotChange::Stored);
        Ok(())
    }

    pub fn store_one(&mut self, item: Arc<I>) -> SlotResult<()> {
        self.store(item, 1)
    }

    /// Take `amount` units out. Emptying the slot clears it.
    pub fn remove(&mut self, amount: u32) -> SlotResult<()> {
        if amount == 0 || amount > self.amount {
            return Err(rejected(
                "remove",
                SlotError::invalid_argument(format!(
                    "cannot remove {amount} unit(s) from a slot holding {}",
                    self.amount
                )),
            ));
        }

        let remaining = self.amount - amount;
        if remaining == 0 {
            self.clear();
            return Ok(());
        }

        self.amount = remaining;
        self.notify(SlotChange::Removed);
        Ok(())
    }

    pub fn remove_one(&mut self) -> SlotResult<()> {
        self.remove(1)
    }

    /// Empty the slot. Notifies even if it was already empty.
    pub fn clear(&mut self) {
        self.item = None;
        self.amount = 0;
        self.notify(SlotChange::Cleared);
    }

    /// Overwrite the count of the item already held. Zero clears the slot.
    pub fn set_amount(&mut self, amount: u32) -> SlotResult<()> {
        let Some(item) = &self.item else {
            return Err(rejected("set_amount", SlotError::EmptySlot));
        };
        if !item.fits(amount) {
            return Err(rejected(
                "set_amount",
                SlotError::invalid_argument(format!(
                    "amount {amount} exceeds the max stack of {}",
                    item.max_stack_amount()
                )),
            ));
        }

        if amount == 0 {
            self.clear();
            return Ok(());
        }

        self.amount = amount;
        self.notify(SlotChange::AmountSet);
        Ok(())
    }

    /// Register a callback invoked synchronously after every change.
    pub fn on_change<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&SlotChanged<I>) + Send + 'static,
    {
        self.listeners.on_change(callback)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Pull-style alternative to [`Slot::on_change`].
    pub fn subscribe(&mut self) -> Subscription<SlotChanged<I>> {
        self.listeners.subscribe()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Validates a store and returns the resulting amount.
    fn check_store(&self, item: &I, amount: u32) -> SlotResult<u32> {
        if amount == 0 {
            return Err(SlotError::invalid_argument("store amount must be greater than zero"));
        }
        let total = self.amount.checked_add(amount).ok_or_else(|| {
            SlotError::invalid_argument(format!("storing {amount} unit(s) overflows the slot"))
        })?;
        if !item.fits(total) {
            return Err(SlotError::invalid_argument(format!(
                "storing {amount} unit(s) would exceed the max stack of {}",
                item.max_stack_amount()
            )));
        }
        if let Some(current) = &self.item {
            if !current.is_same_kind(item) {
                return Err(SlotError::incompatible_item(
                    "slot already holds a different item kind",
                ));
            }
        }
        Ok(total)
    }

    /// Exchange `(item, amount)` with `other` without notifying.
    pub(crate) fn swap_contents(&mut self, other: &mut Slot<I>) {
        std::mem::swap(&mut self.item, &mut other.item);
        std::mem::swap(&mut self.amount, &mut other.amount);
    }

    pub(crate) fn notify(&mut self, change: SlotChange) {
        tracing::trace!(change = change.as_str(), amount = self.amount, "slot changed");

        if self.listeners.is_empty() {
            return;
        }
        let message = SlotChanged {
            change,
            snapshot: self.snapshot(),
            container: self.owning_container,
        };
        self.listeners.publish(&message);
    }
}

impl<I: Item> Default for Slot<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Item + fmt::Display> fmt::Display for Slot<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.item {
            Some(item) => write!(f, "Item: {item}; Amount: {}", self.amount),
            None => write!(f, "Item: ; Amount: {}", self.amount),
        }
    }
}

fn rejected(op: &'static str, err: SlotError) -> SlotError {
    tracing::debug!(op, kind = err.kind(), error = %err, "slot operation rejected");
    err
}
