//! Fixed-capacity slot registry of employee records.

use std::collections::BTreeSet;
use std::fmt;
use std::io::{self, BufRead, Write};

use crate::employee::Employee;
use crate::error::RosterError;
use crate::validate::{validate_division, validate_percent};

const CAPACITY: usize = 10;

/// A fixed-capacity, slot-addressed container of employee records.
///
/// Slots are positional: queries walk them in ascending order and skip
/// empty ones, insertion fills the first empty slot, removal leaves a
/// hole in place. The roster owns its records; [`Roster::add`] stores an
/// independent clone of the caller's value.
///
/// User-visible reports (full array, deletions, filtered listings) are
/// written through the `out` sink each reporting operation takes, which
/// is also how tests capture them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    slots: [Option<Employee>; CAPACITY],
}

impl Roster {
    /// Number of slots in a roster.
    pub const CAPACITY: usize = CAPACITY;

    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from an initial layout, cloning up to
    /// [`Roster::CAPACITY`] entries and preserving their positions.
    /// Entries beyond capacity are ignored.
    pub fn from_slots(initial: &[Option<Employee>]) -> Self {
        let mut roster = Self::new();
        for (slot, value) in roster.slots.iter_mut().zip(initial) {
            *slot = value.clone();
        }
        roster
    }

    /// All stored employees in slot order; holes are skipped.
    pub fn employees(&self) -> impl Iterator<Item = &Employee> {
        self.slots.iter().flatten()
    }

    fn occupied_in<'a, 'b>(&'a self, division: &'b str) -> impl Iterator<Item = &'a Employee> + 'b
    where
        'a: 'b,
    {
        self.employees()
            .filter(move |employee| employee.division() == division)
    }

    // -----------------------------------------------------------------
    // Aggregation
    // -----------------------------------------------------------------

    /// Sum of all stored salaries; 0 for an empty roster.
    pub fn total_salary(&self) -> f64 {
        self.employees().map(Employee::salary).sum()
    }

    /// Sum of salaries in one division; 0 when nobody matches.
    pub fn total_salary_in(&self, division: &str) -> Result<f64, RosterError> {
        validate_division(division)?;
        Ok(self.occupied_in(division).map(Employee::salary).sum())
    }

    /// Mean salary over occupied slots; 0 when the roster is empty.
    pub fn average_salary(&self) -> f64 {
        let count = self.employees().count();
        if count == 0 {
            return 0.0;
        }
        self.total_salary() / count as f64
    }

    /// Mean salary in one division; 0 when nobody matches.
    pub fn average_salary_in(&self, division: &str) -> Result<f64, RosterError> {
        validate_division(division)?;
        let count = self.occupied_in(division).count();
        if count == 0 {
            return Ok(0.0);
        }
        Ok(self.total_salary_in(division)? / count as f64)
    }

    /// The employee with the lowest salary; the first slot wins ties.
    pub fn min_salary_employee(&self) -> Result<&Employee, RosterError> {
        self.employees()
            .reduce(|best, e| if e.salary() < best.salary() { e } else { best })
            .ok_or(RosterError::NotFound)
    }

    /// The lowest-paid employee of one division; the first slot wins ties.
    pub fn min_salary_employee_in(&self, division: &str) -> Result<&Employee, RosterError> {
        validate_division(division)?;
        self.occupied_in(division)
            .reduce(|best, e| if e.salary() < best.salary() { e } else { best })
            .ok_or(RosterError::NotFound)
    }

    /// The employee with the highest salary; the first slot wins ties.
    pub fn max_salary_employee(&self) -> Result<&Employee, RosterError> {
        self.employees()
            .reduce(|best, e| if e.salary() > best.salary() { e } else { best })
            .ok_or(RosterError::NotFound)
    }

    /// The highest-paid employee of one division; the first slot wins ties.
    pub fn max_salary_employee_in(&self, division: &str) -> Result<&Employee, RosterError> {
        validate_division(division)?;
        self.occupied_in(division)
            .reduce(|best, e| if e.salary() > best.salary() { e } else { best })
            .ok_or(RosterError::NotFound)
    }

    // -----------------------------------------------------------------
    // Bulk transforms
    // -----------------------------------------------------------------

    /// Raise every stored salary by `percent` percent, in place.
    pub fn index_salary(&mut self, percent: f64) -> Result<(), RosterError> {
        validate_percent(percent)?;
        let factor = 1.0 + percent / 100.0;
        for employee in self.slots.iter_mut().flatten() {
            employee.set_salary(employee.salary() * factor);
        }
        Ok(())
    }

    /// Raise one division's salaries by `percent` percent, in place.
    pub fn index_salary_in(&mut self, division: &str, percent: f64) -> Result<(), RosterError> {
        validate_division(division)?;
        validate_percent(percent)?;
        let factor = 1.0 + percent / 100.0;
        for employee in self
            .slots
            .iter_mut()
            .flatten()
            .filter(|employee| employee.division() == division)
        {
            employee.set_salary(employee.salary() * factor);
        }
        Ok(())
    }

    // -----------------------------------------------------------------
    // Membership and lookup
    // -----------------------------------------------------------------

    /// Slot index of the employee whose name matches case-insensitively.
    ///
    /// `Ok(None)` when nobody matches; an error when more than one slot
    /// carries the name.
    pub fn find_by_name(&self, name: &str) -> Result<Option<usize>, RosterError> {
        let wanted = name.to_lowercase();
        let mut found = None;
        let mut matches = 0;
        for (index, slot) in self.slots.iter().enumerate() {
            if let Some(employee) = slot {
                if employee.name().to_lowercase() == wanted {
                    found = Some(index);
                    matches += 1;
                }
            }
        }
        if matches > 1 {
            return Err(RosterError::AmbiguousName(name.to_string()));
        }
        Ok(found)
    }

    /// Slot index of the employee with the given id.
    ///
    /// Ids are unique by construction; if duplicates were smuggled in via
    /// clones, the last match in slot order wins.
    pub fn find_by_id(&self, id: u64) -> Option<usize> {
        let mut found = None;
        for (index, slot) in self.slots.iter().enumerate() {
            if let Some(employee) = slot {
                if employee.id() == id {
                    found = Some(index);
                }
            }
        }
        found
    }

    // -----------------------------------------------------------------
    // Insertion and deletion
    // -----------------------------------------------------------------

    /// Store an independent copy of `employee` in the first empty slot.
    ///
    /// `None` is accepted and ignored, returning false without side
    /// effects. When every slot is occupied the roster reports
    /// `The array is already full` and returns false.
    pub fn add(&mut self, employee: Option<&Employee>, out: &mut dyn Write) -> io::Result<bool> {
        let Some(employee) = employee else {
            return Ok(false);
        };
        for slot in self.slots.iter_mut() {
            if slot.is_none() {
                *slot = Some(employee.clone());
                return Ok(true);
            }
        }
        writeln!(out, "The array is already full")?;
        Ok(false)
    }

    /// Remove the employee with the given id, reporting the outcome.
    pub fn remove_by_id(&mut self, id: u64, out: &mut dyn Write) -> Result<bool, RosterError> {
        let index = self.find_by_id(id);
        Ok(self.remove_at(index, out)?)
    }

    /// Remove the employee with the given name, reporting the outcome.
    /// An ambiguous name is rejected before anything is touched.
    pub fn remove_by_name(&mut self, name: &str, out: &mut dyn Write) -> Result<bool, RosterError> {
        let index = self.find_by_name(name)?;
        Ok(self.remove_at(index, out)?)
    }

    fn remove_at(&mut self, index: Option<usize>, out: &mut dyn Write) -> io::Result<bool> {
        match index.and_then(|i| self.slots[i].take()) {
            Some(employee) => {
                writeln!(out, "{employee} successfully deleted.")?;
                Ok(true)
            }
            None => {
                writeln!(out, "Employee not found")?;
                Ok(false)
            }
        }
    }

    // -----------------------------------------------------------------
    // Modification
    // -----------------------------------------------------------------

    /// Set the salary of the employee with the given name.
    pub fn set_salary(&mut self, name: &str, salary: f64) -> Result<(), RosterError> {
        let index = self.find_by_name(name)?.ok_or(RosterError::NotFound)?;
        if let Some(employee) = self.slots[index].as_mut() {
            employee.set_salary(salary);
        }
        Ok(())
    }

    /// Move the employee with the given name to another division.
    pub fn set_division(&mut self, name: &str, division: &str) -> Result<(), RosterError> {
        validate_division(division)?;
        let index = self.find_by_name(name)?.ok_or(RosterError::NotFound)?;
        if let Some(employee) = self.slots[index].as_mut() {
            employee.set_division(division);
        }
        Ok(())
    }

    /// Menu-driven mutation, reading from an injected line source.
    ///
    /// The name is resolved first. The next line selects the action:
    /// `"1"` reads a salary line and updates the salary, `"2"` reads a
    /// division line, validates it, and moves the employee. Lines are
    /// trimmed of surrounding whitespace.
    pub fn modify(&mut self, name: &str, input: &mut dyn BufRead) -> Result<(), RosterError> {
        if self.find_by_name(name)?.is_none() {
            return Err(RosterError::NotFound);
        }
        match read_trimmed_line(input)?.as_str() {
            "1" => {
                let salary: f64 = read_trimmed_line(input)?.parse()?;
                self.set_salary(name, salary)
            }
            "2" => {
                let division = read_trimmed_line(input)?;
                self.set_division(name, &division)
            }
            action => Err(RosterError::UnsupportedAction(action.to_string())),
        }
    }

    // -----------------------------------------------------------------
    // Printing
    // -----------------------------------------------------------------

    /// Print the names of all stored employees on one line, joined by
    /// `", "`.
    pub fn print_all_names(&self, out: &mut dyn Write) -> io::Result<()> {
        let names: Vec<&str> = self.employees().map(Employee::name).collect();
        writeln!(out, "{}", names.join(", "))
    }

    /// Print the short form of every employee earning strictly below
    /// `bound`, or `No such employees`.
    pub fn print_below_salary(&self, bound: f64, out: &mut dyn Write) -> io::Result<()> {
        self.print_filtered(out, |employee| employee.salary() < bound)
    }

    /// Print the short form of every employee earning `bound` or more,
    /// or `No such employees`. The bound itself is included.
    pub fn print_at_or_above_salary(&self, bound: f64, out: &mut dyn Write) -> io::Result<()> {
        self.print_filtered(out, |employee| employee.salary() >= bound)
    }

    fn print_filtered(
        &self,
        out: &mut dyn Write,
        keep: impl Fn(&Employee) -> bool,
    ) -> io::Result<()> {
        let mut any = false;
        for employee in self.employees() {
            if !keep(employee) {
                continue;
            }
            any = true;
            writeln!(out, "{}", employee.short_form())?;
        }
        if !any {
            writeln!(out, "No such employees")?;
        }
        Ok(())
    }

    /// Print employees grouped by division, ascending label order, or
    /// `Array is empty`.
    ///
    /// Each group is the division label with a colon, a blank line, one
    /// short form per employee in slot order, and a closing blank line.
    pub fn print_by_division(&self, out: &mut dyn Write) -> io::Result<()> {
        let divisions: BTreeSet<&str> = self.employees().map(Employee::division).collect();
        if divisions.is_empty() {
            return writeln!(out, "Array is empty");
        }
        for division in divisions {
            writeln!(out, "{division}:\n")?;
            for employee in self.occupied_in(division) {
                writeln!(out, "{}", employee.short_form())?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    // -----------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------

    /// Bracketed list of one division's employees, in slot order.
    ///
    /// The label is not validated here; an unknown label matches nothing
    /// and renders as `[]`.
    pub fn render_division(&self, division: &str) -> String {
        let rendered: Vec<String> = self
            .occupied_in(division)
            .map(ToString::to_string)
            .collect();
        format!("[{}]", rendered.join(", "))
    }
}

/// Full rendering: every slot in order, empty slots as the literal token
/// `null`.
impl fmt::Display for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .slots
            .iter()
            .map(|slot| match slot {
                Some(employee) => employee.to_string(),
                None => "null".to_string(),
            })
            .collect();
        write!(f, "[{}]", rendered.join(", "))
    }
}

fn read_trimmed_line(input: &mut dyn BufRead) -> Result<String, RosterError> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
