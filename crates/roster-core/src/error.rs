//! Errors surfaced by roster operations.

use std::num::ParseFloatError;

/// Everything a roster operation can fail with. Errors surface to the
/// caller synchronously; nothing is retried or swallowed.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// A division argument is outside the closed set `"1"`..`"5"`.
    #[error("division {0:?} does not exist")]
    UnknownDivision(String),

    /// An indexing percent was zero or negative.
    #[error("indexing percent must be positive, got {0}")]
    NonPositivePercent(f64),

    /// No employee qualifies for the requested operation.
    #[error("no matching employee")]
    NotFound,

    /// A name-based lookup matched more than one slot.
    #[error("multiple employees share the name {0:?}")]
    AmbiguousName(String),

    /// The interactive action selector was neither `"1"` nor `"2"`.
    #[error("unsupported action {0:?}")]
    UnsupportedAction(String),

    /// The salary line of an interactive edit was not a real number.
    #[error("parse salary: {0}")]
    ParseSalary(#[from] ParseFloatError),

    /// The injected line source failed.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
