//! The employee record.

use std::fmt;

use serde::Serialize;

use crate::ids;
use crate::money::format_salary;

/// A single employee record.
///
/// The id is minted by [`crate::ids::next_id`] at construction and never
/// changes afterwards; name, division, and salary are independently
/// mutable. Cloning preserves the id and does not advance the counter.
/// The division label is not validated here: operations that accept a
/// division argument validate it at the roster level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Employee {
    id: u64,
    name: String,
    division: String,
    salary: f64,
}

impl Employee {
    /// Create a record with a freshly minted id, storing the fields
    /// verbatim.
    pub fn new(name: &str, division: &str, salary: f64) -> Self {
        Self {
            id: ids::next_id(),
            name: name.to_string(),
            division: division.to_string(),
            salary,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn division(&self) -> &str {
        &self.division
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn set_division(&mut self, division: &str) {
        self.division = division.to_string();
    }

    pub fn set_salary(&mut self, salary: f64) {
        self.salary = salary;
    }

    /// Rendering without the division field, used in division-grouped and
    /// salary-filtered printouts.
    pub fn short_form(&self) -> String {
        format!(
            "Employee(id={}, name={}, salary={})",
            self.id,
            self.name,
            format_salary(self.salary)
        )
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Employee(id={}, name={}, division={}, salary={})",
            self.id,
            self.name,
            self.division,
            format_salary(self.salary)
        )
    }
}
