//! Change notifications for slot-level state.
//!
//! Deliberately small: an [`Event`] marker, a listener registry that fans a
//! message out to callbacks and channel subscriptions, and the
//! [`Subscription`] handle used for pull-style consumption.

pub mod bus;
pub mod event;
pub mod listeners;

pub use bus::Subscription;
pub use event::Event;
pub use listeners::{ChangeListeners, ListenerId};
