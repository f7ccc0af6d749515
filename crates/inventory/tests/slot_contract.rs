use std::sync::{Arc, Mutex};
use std::thread;

use stashkit_events::Event;
use stashkit_inventory::{
    ContainerId, ItemDefinition, Slot, SlotChange, SlotError, TransferOutcome, move_between_slots,
    transfer_within,
};

fn wood() -> Arc<ItemDefinition> {
    Arc::new(ItemDefinition::finite("wood", 50).with_display_name("Wood"))
}

fn stone() -> Arc<ItemDefinition> {
    Arc::new(ItemDefinition::finite("stone", 20).with_display_name("Stone"))
}

#[test]
fn splitting_a_stack_into_an_empty_slot() {
    stashkit_observability::init_for_tests();

    let mut a = Slot::new();
    a.store(wood(), 40).unwrap();
    let mut b = Slot::new();

    move_between_slots(&mut a, &mut b, 20).unwrap();

    assert_eq!(b.to_string(), "Item: Wood; Amount: 20");
    assert_eq!(a.to_string(), "Item: Wood; Amount: 20");
}

#[test]
fn dropping_onto_a_different_item_swaps() {
    stashkit_observability::init_for_tests();

    let mut a = Slot::new();
    a.store(wood(), 10).unwrap();
    let mut b = Slot::new();
    b.store(stone(), 5).unwrap();

    let outcome = move_between_slots(&mut a, &mut b, 3).unwrap();

    assert_eq!(outcome, TransferOutcome::Swapped);
    assert_eq!(a.to_string(), "Item: Stone; Amount: 5");
    assert_eq!(b.to_string(), "Item: Wood; Amount: 10");
}

#[test]
fn subscribers_see_every_change_of_a_drag_and_drop() {
    stashkit_observability::init_for_tests();

    let inventory = ContainerId::new();
    let mut row: Vec<Slot<ItemDefinition>> = (0..3).map(|_| Slot::in_container(inventory)).collect();
    row[0].store(stone(), 12).unwrap();
    row[2].store(stone(), 15).unwrap();

    let source = row[0].subscribe();
    let dest = row[2].subscribe();

    let outcome = transfer_within(&mut row, 0, 2, 8).unwrap();
    assert_eq!(outcome, TransferOutcome::Merged { moved: 5 });

    let source_events = source.drain();
    let dest_events = dest.drain();
    assert_eq!(source_events.len(), 6);
    assert_eq!(dest_events.len(), 6);

    let last = source_events.last().unwrap();
    assert_eq!(last.change, SlotChange::Transferred);
    assert_eq!(last.event_type(), "inventory.slot.transferred");
    assert_eq!(last.version(), 1);
    assert_eq!(last.snapshot().amount, 7);
    assert_eq!(last.container, Some(inventory));

    assert_eq!(dest_events[0].event_type(), "inventory.slot.stored");
    assert_eq!(dest_events.last().unwrap().snapshot().amount, 20);
    assert!(row[2].is_full());
}

#[test]
fn rejected_operations_publish_nothing() {
    stashkit_observability::init_for_tests();

    let mut slot = Slot::new();
    let sub = slot.subscribe();

    assert_eq!(slot.set_amount(1), Err(SlotError::EmptySlot));
    assert!(matches!(slot.remove_one(), Err(SlotError::InvalidArgument(_))));
    assert!(matches!(slot.store(wood(), 51), Err(SlotError::InvalidArgument(_))));

    assert!(sub.try_recv().is_err());
    assert!(slot.is_empty());
}

#[test]
fn dropped_subscriptions_are_forgotten() {
    let mut slot = Slot::new();
    {
        let _sub = slot.subscribe();
        assert_eq!(slot.listener_count(), 1);
    }

    slot.store(wood(), 1).unwrap();

    assert_eq!(slot.listener_count(), 0);
}

#[test]
fn slots_behind_a_lock_move_across_threads() {
    stashkit_observability::init_for_tests();

    let shared = Arc::new(Mutex::new((
        Slot::<ItemDefinition>::new(),
        Slot::<ItemDefinition>::new(),
    )));
    let origin_changes = Arc::new(Mutex::new(0usize));
    let target_sub = {
        let mut guard = shared.lock().unwrap();
        guard.0.store(wood(), 30).unwrap();
        let counter = Arc::clone(&origin_changes);
        guard.0.on_change(move |_| *counter.lock().unwrap() += 1);
        guard.1.subscribe()
    };

    let worker = Arc::clone(&shared);
    let handle = thread::spawn(move || {
        let mut guard = worker.lock().unwrap();
        let (origin, target) = &mut *guard;
        move_between_slots(origin, target, 12)
    });

    assert_eq!(handle.join().unwrap(), Ok(TransferOutcome::Merged { moved: 12 }));
    let guard = shared.lock().unwrap();
    assert_eq!(guard.0.amount(), 18);
    assert_eq!(guard.1.amount(), 12);
    assert_eq!(*origin_changes.lock().unwrap(), 13);

    let first = target_sub.recv().unwrap();
    assert_eq!(first.change, SlotChange::Stored);
    assert_eq!(target_sub.drain().len(), 12);
}
