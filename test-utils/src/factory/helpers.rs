//! Shared helper utilities for factory methods.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Builds a unique, valid South African phone number for test data.
///
/// Numbers are allocated from the `+2782…` mobile range with the counter as
/// suffix, so every factory-created subscriber has a distinct phone.
///
/// # Returns
/// - `String` - Canonical `+27` phone number
pub fn next_phone() -> String {
    format!("+2782{:07}", next_id() % 10_000_000)
}
