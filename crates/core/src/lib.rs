//! `stashkit-core` — building blocks shared by every slot-level crate.
//!
//! This crate contains **pure domain** primitives: the item capability contract,
//! the error taxonomy and identifiers. No logging, no IO.

pub mod error;
pub mod id;
pub mod item;
pub mod value_object;

pub use error::{SlotError, SlotResult};
pub use id::ContainerId;
pub use item::Item;
pub use value_object::ValueObject;
