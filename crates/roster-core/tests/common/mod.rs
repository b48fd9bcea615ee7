//! Shared fixture for roster integration tests.

use std::sync::{Mutex, MutexGuard, PoisonError};

use roster_core::{ids, Employee, Roster};

static ID_LOCK: Mutex<()> = Mutex::new(());

/// The canonical ten-slot dataset plus the guard that keeps the id
/// counter deterministic while a test runs.
pub struct Fixture {
    pub roster: Roster,
    _guard: MutexGuard<'static, ()>,
}

/// Build the canonical dataset: ids 1..=9 in construction order, a hole
/// at slot 3.
///
/// Holds a process-local lock for the fixture's lifetime so parallel
/// tests in the same binary cannot race the counter reset.
pub fn sample() -> Fixture {
    let guard = ID_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    ids::reset(0);
    let slots = [
        Some(Employee::new("John", "1", 123.0)),
        Some(Employee::new("Helen", "2", 150.0)),
        Some(Employee::new("Jim", "3", 180.0)),
        None,
        Some(Employee::new("Ann", "5", 210.0)),
        Some(Employee::new("Rob", "3", 190.0)),
        Some(Employee::new("Kim", "1", 140.0)),
        Some(Employee::new("Jun", "2", 119.5)),
        Some(Employee::new("Jeff", "5", 300.56)),
        Some(Employee::new("Burg", "4", 200.0)),
    ];
    Fixture {
        roster: Roster::from_slots(&slots),
        _guard: guard,
    }
}
