use serde::{Deserialize, Serialize};

use stashkit_core::Item;

/// Catalog entry describing one item kind.
///
/// Kind equality compares `kind` only: two definitions loaded from different
/// catalog files are the same kind if their keys match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemDefinition {
    kind: String,
    display_name: String,
    max_stack: u32,
    #[serde(default)]
    infinite: bool,
}

impl ItemDefinition {
    /// A finite-stack item; the display name defaults to the kind key.
    pub fn finite(kind: impl Into<String>, max_stack: u32) -> Self {
        let kind = kind.into();
        Self {
            display_name: kind.clone(),
            kind,
            max_stack,
            infinite: false,
        }
    }

    /// An item whose stacks are unbounded.
    pub fn infinite(kind: impl Into<String>) -> Self {
        let kind = kind.into();
        Self {
            display_name: kind.clone(),
            kind,
            max_stack: u32::MAX,
            infinite: true,
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

impl Item for ItemDefinition {
    fn is_same_kind(&self, other: &Self) -> bool {
        self.kind == other.kind
    }

    fn max_stack_amount(&self) -> u32 {
        self.max_stack
    }

    fn is_infinite_stack(&self) -> bool {
        self.infinite
    }
}

impl core::fmt::Display for ItemDefinition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.display_name)
    }
}
