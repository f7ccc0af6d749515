//! Slot error model.

use thiserror::Error;

/// Result type used by every slot operation.
pub type SlotResult<T> = Result<T, SlotError>;

/// Contract violation raised by a slot operation.
///
/// All variants are programming errors on the caller's side, not transient
/// conditions. An operation that returns one of these has not mutated any slot
/// and has not notified any listener.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SlotError {
    /// An amount was out of range, exceeded capacity or exceeded what a slot holds.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A different item kind was stored into an occupied slot.
    #[error("incompatible item: {0}")]
    IncompatibleItem(String),

    /// An amount was assigned to a slot that holds no item.
    #[error("slot is empty: there is no item to set an amount for")]
    EmptySlot,

    /// A pair operation referenced a slot that does not exist.
    #[error("missing slot: {0}")]
    MissingSlot(String),
}

impl SlotError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn incompatible_item(msg: impl Into<String>) -> Self {
        Self::IncompatibleItem(msg.into())
    }

    pub fn missing_slot(msg: impl Into<String>) -> Self {
        Self::MissingSlot(msg.into())
    }

    /// Stable short name of the error class, for structured log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            SlotError::InvalidArgument(_) => "invalid_argument",
            SlotError::IncompatibleItem(_) => "incompatible_item",
            SlotError::EmptySlot => "empty_slot",
            SlotError::MissingSlot(_) => "missing_slot",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        let err = SlotError::invalid_argument("amount must be positive");
        assert_eq!(err.to_string(), "invalid argument: amount must be positive");

        let err = SlotError::missing_slot("origin index 7 out of range (len 3)");
        assert_eq!(err.kind(), "missing_slot");
        assert!(err.to_string().contains("index 7"));
    }
}
