//! roster-cli: command surface for the employee roster.
//!
//! Every invocation starts from the same teaching dataset and drives the
//! core against it; there is no persistence. The interactive `menu`
//! command is the outer layer for the core's line-driven `modify`.

use std::io::{BufRead, Write};

use roster_core::money::format_salary;
use roster_core::{Employee, Roster};
use tabwriter::TabWriter;

enum CliError {
    /// Bad flags or arguments; exits 2.
    Usage(String),
    /// The operation itself failed; exits 1.
    Failed(String),
}

fn help_text() -> String {
    "\
roster explores a fixed-capacity employee registry seeded with sample data.

Usage:
  roster [command]

Available Commands:
  help     Show this help
  list     List employees, optionally one division
  menu     Interactive session (show, names, add, remove, modify, raise, quit)
  names    Print all employee names on one line
  raise    Raise salaries by a percentage
  report   Total, average, and salary extremes

Flags:
  -h, --help   help for roster

Use \"roster list --json\" for machine-readable output.\n"
        .to_string()
}

/// The teaching dataset every invocation starts from.
fn seed_roster() -> Roster {
    Roster::from_slots(&[
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
    ])
}

/// Dispatch a command line. Returns the process exit code.
pub fn run(
    args: &[&str],
    input: &mut dyn BufRead,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> i32 {
    let Some((command, rest)) = args.split_first() else {
        let _ = write!(stdout, "{}", help_text());
        return 0;
    };

    let result = match *command {
        "-h" | "--help" | "help" => {
            let _ = write!(stdout, "{}", help_text());
            return 0;
        }
        "list" => run_list(rest, stdout),
        "names" => run_names(rest, stdout),
        "report" => run_report(rest, stdout),
        "raise" => run_raise(rest, stdout),
        "menu" => run_menu(input, stdout),
        _ => {
            let _ = writeln!(stderr, "Error: unknown command {command:?} for \"roster\"");
            return 1;
        }
    };

    match result {
        Ok(()) => 0,
        Err(CliError::Usage(message)) => {
            let _ = writeln!(stderr, "{message}");
            2
        }
        Err(CliError::Failed(message)) => {
            let _ = writeln!(stderr, "Error: {message}");
            1
        }
    }
}

fn run_list(args: &[&str], stdout: &mut dyn Write) -> Result<(), CliError> {
    let mut division: Option<String> = None;
    let mut json = false;
    let mut rest = args.iter();
    while let Some(arg) = rest.next() {
        match *arg {
            "--json" => json = true,
            "--division" => division = Some(flag_value(&mut rest, "--division")?),
            other => return Err(CliError::Usage(format!("unknown flag: {other}"))),
        }
    }

    let roster = seed_roster();
    let employees: Vec<&Employee> = match &division {
        Some(label) => roster
            .employees()
            .filter(|employee| employee.division() == label)
            .collect(),
        None => roster.employees().collect(),
    };

    if json {
        let payload = serde_json::to_string_pretty(&employees)
            .map_err(|err| CliError::Failed(format!("encode employees: {err}")))?;
        writeln!(stdout, "{payload}").map_err(write_failed)?;
        return Ok(());
    }

    let table = render_table(&employees)?;
    write!(stdout, "{table}").map_err(write_failed)?;
    Ok(())
}

fn run_names(args: &[&str], stdout: &mut dyn Write) -> Result<(), CliError> {
    if let Some(flag) = args.first() {
        return Err(CliError::Usage(format!("unknown flag: {flag}")));
    }
    seed_roster().print_all_names(stdout).map_err(write_failed)
}

fn run_report(args: &[&str], stdout: &mut dyn Write) -> Result<(), CliError> {
    let mut division: Option<String> = None;
    let mut rest = args.iter();
    while let Some(arg) = rest.next() {
        match *arg {
            "--division" => division = Some(flag_value(&mut rest, "--division")?),
            other => return Err(CliError::Usage(format!("unknown flag: {other}"))),
        }
    }

    let roster = seed_roster();
    // The total is computed first so an unknown division label fails
    // before any lines are written.
    let (total, average, min, max) = match &division {
        Some(label) => (
            roster.total_salary_in(label).map_err(op_failed)?,
            roster.average_salary_in(label).map_err(op_failed)?,
            roster
                .min_salary_employee_in(label)
                .ok()
                .map(ToString::to_string),
            roster
                .max_salary_employee_in(label)
                .ok()
                .map(ToString::to_string),
        ),
        None => (
            roster.total_salary(),
            roster.average_salary(),
            roster.min_salary_employee().ok().map(ToString::to_string),
            roster.max_salary_employee().ok().map(ToString::to_string),
        ),
    };

    writeln!(stdout, "total:   {}", format_salary(total)).map_err(write_failed)?;
    writeln!(stdout, "average: {}", format_salary(average)).map_err(write_failed)?;
    if let Some(min) = min {
        writeln!(stdout, "min:     {min}").map_err(write_failed)?;
    }
    if let Some(max) = max {
        writeln!(stdout, "max:     {max}").map_err(write_failed)?;
    }
    Ok(())
}

fn run_raise(args: &[&str], stdout: &mut dyn Write) -> Result<(), CliError> {
    let mut division: Option<String> = None;
    let mut percent: Option<&str> = None;
    let mut rest = args.iter();
    while let Some(arg) = rest.next() {
        match *arg {
            "--division" => division = Some(flag_value(&mut rest, "--division")?),
            other if other.starts_with('-') => {
                return Err(CliError::Usage(format!("unknown flag: {other}")));
            }
            value if percent.is_none() => percent = Some(value),
            other => return Err(CliError::Usage(format!("unexpected argument: {other}"))),
        }
    }

    let percent: f64 = percent
        .ok_or_else(|| CliError::Usage("raise needs a percentage".to_string()))?
        .parse()
        .map_err(|err| CliError::Usage(format!("invalid percentage: {err}")))?;

    let mut roster = seed_roster();
    match &division {
        Some(label) => roster.index_salary_in(label, percent).map_err(op_failed)?,
        None => roster.index_salary(percent).map_err(op_failed)?,
    }

    let employees: Vec<&Employee> = match &division {
        Some(label) => roster
            .employees()
            .filter(|employee| employee.division() == label)
            .collect(),
        None => roster.employees().collect(),
    };
    let table = render_table(&employees)?;
    write!(stdout, "{table}").map_err(write_failed)?;
    Ok(())
}

fn run_menu(input: &mut dyn BufRead, stdout: &mut dyn Write) -> Result<(), CliError> {
    let mut roster = seed_roster();
    writeln!(
        stdout,
        "Commands: show, names, add <name> <division> <salary>, remove <name>, \
         modify <name>, raise <percent>, quit"
    )
    .map_err(write_failed)?;

    loop {
        write!(stdout, "roster> ").map_err(write_failed)?;
        stdout.flush().map_err(write_failed)?;

        let mut raw = String::new();
        let read = input.read_line(&mut raw).map_err(write_failed)?;
        if read == 0 {
            return Ok(());
        }
        let mut parts = raw.split_whitespace();
        let Some(verb) = parts.next() else {
            continue;
        };

        match verb {
            "quit" | "exit" => return Ok(()),
            "show" => writeln!(stdout, "{roster}").map_err(write_failed)?,
            "names" => roster.print_all_names(stdout).map_err(write_failed)?,
            "add" => {
                let (name, division, salary) = match (parts.next(), parts.next(), parts.next()) {
                    (Some(name), Some(division), Some(salary)) => (name, division, salary),
                    _ => {
                        writeln!(stdout, "usage: add <name> <division> <salary>")
                            .map_err(write_failed)?;
                        continue;
                    }
                };
                match salary.parse::<f64>() {
                    Ok(salary) => {
                        let employee = Employee::new(name, division, salary);
                        let added = roster.add(Some(&employee), stdout).map_err(write_failed)?;
                        if added {
                            writeln!(stdout, "{employee} added.").map_err(write_failed)?;
                        }
                    }
                    Err(err) => {
                        writeln!(stdout, "invalid salary: {err}").map_err(write_failed)?;
                    }
                }
            }
            "remove" => {
                let Some(name) = parts.next() else {
                    writeln!(stdout, "usage: remove <name>").map_err(write_failed)?;
                    continue;
                };
                if let Err(err) = roster.remove_by_name(name, stdout) {
                    writeln!(stdout, "remove failed: {err}").map_err(write_failed)?;
                }
            }
            "modify" => {
                let Some(name) = parts.next() else {
                    writeln!(stdout, "usage: modify <name>").map_err(write_failed)?;
                    continue;
                };
                writeln!(
                    stdout,
                    "Choose action:\n 1. Change salary.\n 2. Change division.\n\
                     Then enter the new value on the next line."
                )
                .map_err(write_failed)?;
                if let Err(err) = roster.modify(name, input) {
                    writeln!(stdout, "modify failed: {err}").map_err(write_failed)?;
                }
            }
            "raise" => {
                let Some(value) = parts.next() else {
                    writeln!(stdout, "usage: raise <percent>").map_err(write_failed)?;
                    continue;
                };
                match value.parse::<f64>() {
                    Ok(percent) => match roster.index_salary(percent) {
                        Ok(()) => writeln!(stdout, "salaries raised by {percent}%")
                            .map_err(write_failed)?,
                        Err(err) => {
                            writeln!(stdout, "raise failed: {err}").map_err(write_failed)?;
                        }
                    },
                    Err(err) => {
                        writeln!(stdout, "invalid percentage: {err}").map_err(write_failed)?;
                    }
                }
            }
            other => writeln!(stdout, "unknown command {other:?}").map_err(write_failed)?,
        }
    }
}

fn render_table(employees: &[&Employee]) -> Result<String, CliError> {
    let mut tw = TabWriter::new(Vec::new());
    writeln!(tw, "ID\tNAME\tDIVISION\tSALARY").map_err(write_failed)?;
    for employee in employees {
        writeln!(
            tw,
            "{}\t{}\t{}\t{}",
            employee.id(),
            employee.name(),
            employee.division(),
            format_salary(employee.salary())
        )
        .map_err(write_failed)?;
    }
    tw.flush().map_err(write_failed)?;
    let bytes = tw
        .into_inner()
        .map_err(|err| CliError::Failed(format!("flush table: {err}")))?;
    String::from_utf8(bytes).map_err(|err| CliError::Failed(format!("render table: {err}")))
}

fn flag_value<'a>(
    rest: &mut std::slice::Iter<'a, &str>,
    flag: &str,
) -> Result<String, CliError> {
    rest.next()
        .map(|value| (*value).to_string())
        .ok_or_else(|| CliError::Usage(format!("{flag} needs a value")))
}

fn write_failed(err: std::io::Error) -> CliError {
    CliError::Failed(format!("write: {err}"))
}

fn op_failed(err: roster_core::RosterError) -> CliError {
    CliError::Failed(err.to_string())
}
