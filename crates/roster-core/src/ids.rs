//! Process-wide identifier source for employee records.

use std::sync::atomic::{AtomicU64, Ordering};

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Mint the next employee id.
///
/// The counter starts at 0, so the first minted id is 1. Minting is a
/// single atomic increment; the roster itself stays single-threaded.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, Ordering::Relaxed) + 1
}

/// Reset the counter to an arbitrary value.
///
/// Test hook: suites that assert exact rendered ids reset to 0 before
/// building their fixture. Callers sharing a process must serialize
/// resets themselves.
pub fn reset(value: u64) {
    COUNTER.store(value, Ordering::Relaxed);
}
