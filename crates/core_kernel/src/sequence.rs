//! Account number allocation
//!
//! Account numbers are a fixed bank prefix followed by the value of a
//! process-wide counter. The counter lives in an [`AccountNumberSequence`]
//! owned by whoever opens accounts (not a static), and increments
//! atomically so two accounts opened in the same process can never share
//! a number, even from concurrent threads.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Display prefix for account numbers
pub const ACCOUNT_NUMBER_PREFIX: &str = "BB";

/// First counter value handed out by a fresh sequence
pub const ACCOUNT_NUMBER_SEED: u64 = 100_000_000_001;

/// A bank account number, assigned once at account opening
///
/// Formatted as the bank prefix plus the decimal counter value,
/// e.g. `BB100000000001`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(u64);

impl AccountNumber {
    /// Returns the raw counter value behind this number
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ACCOUNT_NUMBER_PREFIX, self.0)
    }
}

/// Monotonic allocator for [`AccountNumber`]s
///
/// `next()` uses an atomic fetch-add, so numbers are distinct and
/// strictly increasing for the lifetime of the sequence regardless of
/// how many threads mint them.
#[derive(Debug)]
pub struct AccountNumberSequence {
    next: AtomicU64,
}

impl AccountNumberSequence {
    /// Creates a sequence starting at [`ACCOUNT_NUMBER_SEED`]
    pub fn new() -> Self {
        Self::starting_at(ACCOUNT_NUMBER_SEED)
    }

    /// Creates a sequence starting at an explicit counter value
    pub fn starting_at(seed: u64) -> Self {
        Self {
            next: AtomicU64::new(seed),
        }
    }

    /// Mints the next account number
    pub fn next(&self) -> AccountNumber {
        AccountNumber(self.next.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for AccountNumberSequence {
    fn default() -> Self {
        Self::new()
    }
}
