//! Argument validation for division labels and indexing percentages.

use crate::error::RosterError;

/// Check that a division label matches `^[12345]$`.
pub fn validate_division(division: &str) -> Result<(), RosterError> {
    let mut chars = division.chars();
    if matches!((chars.next(), chars.next()), (Some('1'..='5'), None)) {
        Ok(())
    } else {
        Err(RosterError::UnknownDivision(division.to_string()))
    }
}

/// Check that an indexing percent is strictly positive.
pub fn validate_percent(percent: f64) -> Result<(), RosterError> {
    if percent <= 0.0 {
        return Err(RosterError::NonPositivePercent(percent));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_division, validate_percent};
    use crate::error::RosterError;

    #[test]
    fn known_divisions_pass() {
        for label in ["1", "2", "3", "4", "5"] {
            assert!(validate_division(label).is_ok(), "label={label}");
        }
    }

    #[test]
    fn unknown_divisions_fail() {
        for label in ["0", "6", "", "12", " 1", "a"] {
            assert!(
                matches!(
                    validate_division(label),
                    Err(RosterError::UnknownDivision(_))
                ),
                "label={label:?}"
            );
        }
    }

    #[test]
    fn positive_percent_passes() {
        assert!(validate_percent(0.5).is_ok());
        assert!(validate_percent(50.0).is_ok());
    }

    #[test]
    fn zero_and_negative_percent_fail() {
        assert!(matches!(
            validate_percent(0.0),
            Err(RosterError::NonPositivePercent(_))
        ));
        assert!(matches!(
            validate_percent(-10.0),
            Err(RosterError::NonPositivePercent(_))
        ));
    }
}
