//! Moving stacks between two slots.
//!
//! Compatible slots merge unit by unit until the target is full or the
//! requested amount has moved. Incompatible occupied slots swap contents
//! wholesale.

use std::sync::Arc;

use stashkit_core::{Item, SlotError, SlotResult};

use crate::event::SlotChange;
use crate::slot::Slot;

/// What a pair operation ended up doing.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TransferOutcome {
    /// Units moved from origin to target. May be fewer than requested.
    Merged { moved: u32 },
    /// The two slots exchanged their contents.
    Swapped,
}

/// Move up to `transfer_amount` units from `origin` into `target`.
///
/// If `target` is empty or holds the same kind, units move one at a time
/// (each a `store_one` on the target and a `remove_one` on the origin, with
/// their own notifications) until the amount is reached or the target is
/// full. Stopping early is not an error.
///
/// If `target` holds a different kind, the slots swap `(item, amount)` and
/// `transfer_amount` is ignored.
///
/// Either way both slots publish one final `Transferred` or `Swapped`
/// notification. Fails with `InvalidArgument`, before touching anything, when
/// `transfer_amount` exceeds what `origin` holds.
pub fn move_between_slots<I: Item>(
    origin: &mut Slot<I>,
    target: &mut Slot<I>,
    transfer_amount: u32,
) -> SlotResult<TransferOutcome> {
    ensure_available(origin, transfer_amount)?;

    let mergeable = match (origin.item(), target.item()) {
        (_, None) => true,
        (Some(from), Some(to)) => from.is_same_kind(to),
        // Nothing to move out of an empty origin.
        (None, Some(_)) => true,
    };

    if !mergeable {
        origin.swap_contents(target);
        origin.notify(SlotChange::Swapped);
        target.notify(SlotChange::Swapped);
        tracing::debug!(requested = transfer_amount, "slot contents swapped");
        return Ok(TransferOutcome::Swapped);
    }

    let mut moved = 0;
    if let Some(item) = origin.item().cloned() {
        while moved < transfer_amount && has_room(target, &*item) {
            target.store_one(Arc::clone(&item))?;
            origin.remove_one()?;
            moved += 1;
        }
    }

    origin.notify(SlotChange::Transferred);
    target.notify(SlotChange::Transferred);
    tracing::debug!(requested = transfer_amount, moved, "slot units transferred");
    Ok(TransferOutcome::Merged { moved })
}

/// Index-addressed form of [`move_between_slots`] over a row of slots.
///
/// `origin` and `target` may be the same index: the amount is still
/// validated, nothing moves, and the slot is notified once. An index past
/// the end of `slots` fails with `MissingSlot`.
pub fn transfer_within<I: Item>(
    slots: &mut [Slot<I>],
    origin: usize,
    target: usize,
    transfer_amount: u32,
) -> SlotResult<TransferOutcome> {
    let len = slots.len();
    for (role, index) in [("origin", origin), ("target", target)] {
        if index >= len {
            let err = SlotError::missing_slot(format!("{role} index {index} out of range (len {len})"));
            tracing::debug!(kind = err.kind(), error = %err, "slot transfer rejected");
            return Err(err);
        }
    }

    if origin == target {
        let slot = &mut slots[origin];
        ensure_available(slot, transfer_amount)?;
        slot.notify(SlotChange::Transferred);
        tracing::debug!(requested = transfer_amount, moved = 0, "slot units transferred");
        return Ok(TransferOutcome::Merged { moved: 0 });
    }

    let (from, to) = pair_mut(slots, origin, target);
    move_between_slots(from, to, transfer_amount)
}

fn ensure_available<I: Item>(origin: &Slot<I>, transfer_amount: u32) -> SlotResult<()> {
    if transfer_amount > origin.amount() {
        let err = SlotError::invalid_argument(format!(
            "cannot transfer {transfer_amount} unit(s) from a slot holding {}",
            origin.amount()
        ));
        tracing::debug!(kind = err.kind(), error = %err, "slot transfer rejected");
        return Err(err);
    }
    Ok(())
}

/// Capacity is judged by the origin's item, since that is what gets stored.
fn has_room<I: Item>(target: &Slot<I>, item: &I) -> bool {
    if item.is_infinite_stack() {
        target.amount() < u32::MAX
    } else {
        target.amount() < item.max_stack_amount()
    }
}

/// Two distinct mutable borrows out of one slice. `a != b`, both in range.
fn pair_mut<T>(slots: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    if a < b {
        let (left, right) = slots.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = slots.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}
