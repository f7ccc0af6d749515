//! In-process listener registry.

use std::fmt;
use std::sync::mpsc;

use crate::bus::Subscription;

/// Handle returned by [`ChangeListeners::on_change`], used to unregister.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Callback<M> = Box<dyn FnMut(&M) + Send>;

/// Synchronous fan-out of change messages.
///
/// - No IO / no async: callbacks run on the publisher's thread before
///   [`ChangeListeners::publish`] returns
/// - Callbacks run first, in registration order, then channel subscriptions
/// - Exactly one delivery per publish per live listener
/// - `Send` whenever `M` is, so an owner can sit behind a `Mutex`
pub struct ChangeListeners<M> {
    next_id: u64,
    callbacks: Vec<(ListenerId, Callback<M>)>,
    channels: Vec<mpsc::Sender<M>>,
}

impl<M> ChangeListeners<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a push-style callback.
    pub fn on_change<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&M) + Send + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Box::new(callback)));
        id
    }

    /// Unregister a callback. Returns `false` if `id` was not registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(existing, _)| *existing != id);
        self.callbacks.len() != before
    }

    /// Open a pull-style subscription backed by a channel.
    pub fn subscribe(&mut self) -> Subscription<M> {
        let (tx, rx) = mpsc::channel();
        self.channels.push(tx);
        Subscription::new(rx)
    }

    /// Number of registered callbacks plus live-or-not-yet-pruned subscriptions.
    pub fn len(&self) -> usize {
        self.callbacks.len() + self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<M: Clone> ChangeListeners<M> {
    /// Deliver `message` to every listener.
    pub fn publish(&mut self, message: &M) {
        for (_, callback) in &mut self.callbacks {
            callback(message);
        }

        // Drop any dead subscribers while publishing.
        let before = self.channels.len();
        self.channels.retain(|tx| tx.send(message.clone()).is_ok());
        let pruned = before - self.channels.len();
        if pruned > 0 {
            tracing::trace!(pruned, "dropped closed change subscriptions");
        }
    }
}

impl<M> Default for ChangeListeners<M> {
    fn default() -> Self {
        Self {
            next_id: 0,
            callbacks: Vec::new(),
            channels: Vec::new(),
        }
    }
}

impl<M> fmt::Debug for ChangeListeners<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeListeners")
            .field("callbacks", &self.callbacks.len())
            .field("channels", &self.channels.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn callbacks_run_in_registration_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut listeners = ChangeListeners::new();

        let first = Arc::clone(&seen);
        listeners.on_change(move |m: &u32| first.lock().unwrap().push(("first", *m)));
        let second = Arc::clone(&seen);
        listeners.on_change(move |m: &u32| second.lock().unwrap().push(("second", *m)));

        listeners.publish(&7);

        assert_eq!(*seen.lock().unwrap(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn removed_callback_is_not_called() {
        let count = Arc::new(Mutex::new(0));
        let mut listeners = ChangeListeners::new();
        let c = Arc::clone(&count);
        let id = listeners.on_change(move |_: &u32| *c.lock().unwrap() += 1);

        assert!(listeners.remove(id));
        assert!(!listeners.remove(id));
        listeners.publish(&1);

        assert_eq!(*count.lock().unwrap(), 0);
        assert!(listeners.is_empty());
    }

    #[test]
    fn subscriptions_receive_copies_and_are_pruned_when_dropped() {
        let mut listeners = ChangeListeners::new();
        let keep = listeners.subscribe();
        let gone = listeners.subscribe();
        assert_eq!(listeners.len(), 2);

        drop(gone);
        listeners.publish(&"stored".to_string());
        listeners.publish(&"cleared".to_string());

        assert_eq!(keep.drain(), vec!["stored".to_string(), "cleared".to_string()]);
        assert_eq!(listeners.len(), 1);
    }

    #[test]
    fn registry_moves_to_another_thread() {
        let mut listeners = ChangeListeners::new();
        let sub = listeners.subscribe();

        let handle = std::thread::spawn(move || {
            listeners.publish(&5u32);
            listeners
        });
        let listeners = handle.join().unwrap();

        assert_eq!(sub.recv().unwrap(), 5);
        assert_eq!(listeners.len(), 1);
    }
}
