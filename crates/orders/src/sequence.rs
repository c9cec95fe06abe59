//! Sequential, human-facing order identifiers.

use serde::{Deserialize, Serialize};

/// Order identifier. Sequential and human-facing (printed on receipts),
/// unlike the opaque ids a storage layer would use.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct OrderId(u64);

impl OrderId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for OrderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Monotonic id generator, starting at 1.
///
/// An explicit value owned by whoever creates orders (the shell in
/// production, the test in tests) rather than hidden global state. Ids are
/// unique only under sequential single-threaded creation, which is all this
/// system does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderIdSequence {
    next: u64,
}

impl OrderIdSequence {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Start the sequence at an arbitrary first id.
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    pub fn next_id(&mut self) -> OrderId {
        let id = OrderId::new(self.next);
        self.next += 1;
        id
    }
}

impl Default for OrderIdSequence {
    fn default() -> Self {
        Self::new()
    }
}
