//! Pull-style consumption of published events.

use std::sync::mpsc::{Receiver, RecvError, TryRecvError};

/// A subscription to a stream of change events.
///
/// Each subscription gets its own copy of every event published after it was
/// created. Dropping the subscription unregisters it lazily: the publisher
/// notices the closed channel on its next publish and forgets it.
///
/// ```ignore
/// let sub = slot.subscribe();
/// slot.store(wood, 3)?;
/// for change in sub.drain() {
///     redraw(change.snapshot());
/// }
/// ```
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Block until the next message is available.
    pub fn recv(&self) -> Result<M, RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, TryRecvError> {
        self.receiver.try_recv()
    }

    /// Collect every message that is already queued, without blocking.
    pub fn drain(&self) -> Vec<M> {
        self.receiver.try_iter().collect()
    }
}
