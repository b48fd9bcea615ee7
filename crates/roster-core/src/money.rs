//! Salary rendering for the fixed textual contract.

/// Format a salary with two fraction digits.
///
/// The rendered contract uses a comma as the decimal separator.
pub fn format_salary(value: f64) -> String {
    format!("{value:.2}").replace('.', ",")
}

#[cfg(test)]
mod tests {
    use super::format_salary;

    #[test]
    fn whole_amounts_gain_two_fraction_digits() {
        assert_eq!(format_salary(123.0), "123,00");
        assert_eq!(format_salary(0.0), "0,00");
    }

    #[test]
    fn fractions_render_with_a_comma() {
        assert_eq!(format_salary(119.5), "119,50");
        assert_eq!(format_salary(300.56), "300,56");
    }

    #[test]
    fn negative_amounts_keep_their_sign() {
        assert_eq!(format_salary(-42.5), "-42,50");
    }
}
