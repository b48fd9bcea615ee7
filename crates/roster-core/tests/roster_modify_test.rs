#![allow(clippy::expect_used, clippy::unwrap_used)]

mod common;

use std::io::Cursor;

use roster_core::RosterError;

#[test]
fn action_one_changes_the_salary() {
    let mut fixture = common::sample();
    let mut input = Cursor::new("1\n200\n");
    fixture.roster.modify("Jim", &mut input).expect("modify");
    assert_eq!(
        fixture.roster.total_salary_in("3").expect("total"),
        200.0 + 190.0
    );
}

#[test]
fn action_two_changes_the_division() {
    let mut fixture = common::sample();
    let mut input = Cursor::new("2\n 4 \n");
    fixture.roster.modify("Helen", &mut input).expect("modify");
    assert_eq!(
        fixture.roster.total_salary_in("4").expect("total"),
        150.0 + 200.0
    );
    assert_eq!(
        fixture.roster.total_salary_in("2").expect("old division"),
        119.5
    );
}

#[test]
fn the_name_is_resolved_before_any_input_is_read() {
    let mut fixture = common::sample();
    let mut input = Cursor::new("1\n200\n");
    assert!(matches!(
        fixture.roster.modify("Nobody", &mut input),
        Err(RosterError::NotFound)
    ));
    // Nothing was consumed, nothing was changed.
    assert_eq!(input.position(), 0);
    assert_eq!(fixture.roster.total_salary(), 1613.06);
}

#[test]
fn unknown_actions_are_rejected() {
    let mut fixture = common::sample();
    let mut input = Cursor::new("3\n");
    assert!(matches!(
        fixture.roster.modify("Jim", &mut input),
        Err(RosterError::UnsupportedAction(_))
    ));
}

#[test]
fn salary_parse_failures_surface_and_change_nothing() {
    let mut fixture = common::sample();
    let mut input = Cursor::new("1\nlots\n");
    assert!(matches!(
        fixture.roster.modify("Jim", &mut input),
        Err(RosterError::ParseSalary(_))
    ));
    assert_eq!(
        fixture.roster.total_salary_in("3").expect("total"),
        180.0 + 190.0
    );
}

#[test]
fn the_new_division_is_validated() {
    let mut fixture = common::sample();
    let mut input = Cursor::new("2\n9\n");
    assert!(matches!(
        fixture.roster.modify("Jim", &mut input),
        Err(RosterError::UnknownDivision(_))
    ));
}

#[test]
fn a_shared_name_is_ambiguous_for_modify() {
    let mut fixture = common::sample();
    let mut out = Vec::new();
    let second_jim = roster_core::Employee::new("jim", "5", 100.0);
    assert!(fixture.roster.add(Some(&second_jim), &mut out).expect("add"));

    let mut input = Cursor::new("1\n200\n");
    assert!(matches!(
        fixture.roster.modify("Jim", &mut input),
        Err(RosterError::AmbiguousName(_))
    ));
}
