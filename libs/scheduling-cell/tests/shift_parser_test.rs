// libs/scheduling-cell/tests/shift_parser_test.rs
//
// The parser is the only place schedule shapes are distinguished;
// these tests drive it through every shape the backend emits.

use chrono::NaiveDate;
use serde_json::{json, Value};
use uuid::Uuid;

use scheduling_cell::ShiftScheduleService;
use shared_models::{Employee, ShiftInterval};

/// Monday in the test calendar.
fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 9, 7).unwrap()
}

fn friday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 9, 11).unwrap()
}

fn employee_with(day: &str, descriptor: Value) -> Employee {
    serde_json::from_value(json!({
        "id": Uuid::new_v4(),
        "name": "Test Professional",
        "isActive": true,
        "workSchedule": {
            "weekly": { day: descriptor }
        }
    }))
    .expect("employee fixture deserializes")
}

fn shift(start: i32, end: i32) -> ShiftInterval {
    ShiftInterval { start, end }
}

#[test]
fn normalizes_delimited_range_string() {
    let employee = employee_with("monday", json!("09:00-13:00, 14:00-18:00"));
    let shifts = ShiftScheduleService::new().shifts_for_date(&employee, monday());
    assert_eq!(shifts, vec![shift(540, 780), shift(840, 1080)]);
}

#[test]
fn normalizes_array_of_range_strings() {
    let employee = employee_with("monday", json!(["14:00-18:00", "09:00-13:00"]));
    let shifts = ShiftScheduleService::new().shifts_for_date(&employee, monday());
    assert_eq!(shifts, vec![shift(540, 780), shift(840, 1080)]);
}

#[test]
fn normalizes_single_shift_object() {
    let employee = employee_with("monday", json!({ "startTime": "09:00", "endTime": "17:00" }));
    let shifts = ShiftScheduleService::new().shifts_for_date(&employee, monday());
    assert_eq!(shifts, vec![shift(540, 1020)]);
}

#[test]
fn normalizes_array_of_shift_objects() {
    let employee = employee_with(
        "monday",
        json!([
            { "startTime": "09:00", "endTime": "12:00" },
            { "startTime": "13:00", "endTime": "17:00" }
        ]),
    );
    let shifts = ShiftScheduleService::new().shifts_for_date(&employee, monday());
    assert_eq!(shifts, vec![shift(540, 720), shift(780, 1020)]);
}

#[test]
fn normalizes_working_flag_with_times() {
    let employee = employee_with(
        "monday",
        json!({ "isWorking": true, "startTime": "10:00", "endTime": "16:00" }),
    );
    let shifts = ShiftScheduleService::new().shifts_for_date(&employee, monday());
    assert_eq!(shifts, vec![shift(600, 960)]);
}

#[test]
fn working_flag_false_means_day_off() {
    let employee = employee_with(
        "monday",
        json!({ "isWorking": false, "startTime": "10:00", "endTime": "16:00" }),
    );
    let shifts = ShiftScheduleService::new().shifts_for_date(&employee, monday());
    assert!(shifts.is_empty());
}

#[test]
fn working_flag_without_times_yields_nothing() {
    let employee = employee_with("monday", json!({ "isWorking": true }));
    let shifts = ShiftScheduleService::new().shifts_for_date(&employee, monday());
    assert!(shifts.is_empty());
}

#[test]
fn normalizes_nested_shifts_data() {
    let employee = employee_with(
        "monday",
        json!({ "shiftsData": [
            { "startTime": "08:00", "endTime": "12:00" },
            { "startTime": "15:00", "endTime": "20:00" }
        ] }),
    );
    let shifts = ShiftScheduleService::new().shifts_for_date(&employee, monday());
    assert_eq!(shifts, vec![shift(480, 720), shift(900, 1200)]);
}

#[test]
fn no_schedule_entry_means_not_working() {
    let employee = employee_with("tuesday", json!("09:00-17:00"));
    let shifts = ShiftScheduleService::new().shifts_for_date(&employee, monday());
    assert!(shifts.is_empty());
}

#[test]
fn not_working_override_beats_recurring_pattern() {
    let employee: Employee = serde_json::from_value(json!({
        "id": Uuid::new_v4(),
        "name": "Test Professional",
        "isActive": true,
        "workSchedule": {
            "weekly": { "friday": "09:00-17:00" },
            "overrides": [
                { "date": "2026-09-11", "isWorking": false, "reason": "vacation" }
            ]
        }
    }))
    .unwrap();

    let parser = ShiftScheduleService::new();
    assert!(parser.shifts_for_date(&employee, friday()).is_empty());

    let next_friday = NaiveDate::from_ymd_opt(2026, 9, 18).unwrap();
    assert_eq!(
        parser.shifts_for_date(&employee, next_friday),
        vec![shift(540, 1020)]
    );
}

#[test]
fn malformed_entry_does_not_hide_valid_shifts() {
    let employee = employee_with("monday", json!("garbage, 14:00-18:00"));
    let shifts = ShiftScheduleService::new().shifts_for_date(&employee, monday());
    assert_eq!(shifts, vec![shift(840, 1080)]);
}

#[test]
fn inverted_range_is_dropped() {
    let employee = employee_with("monday", json!(["17:00-09:00", "09:00-12:00"]));
    let shifts = ShiftScheduleService::new().shifts_for_date(&employee, monday());
    assert_eq!(shifts, vec![shift(540, 720)]);
}

#[test]
fn midnight_end_normalizes_to_end_of_day() {
    let employee = employee_with("monday", json!("20:00-00:00"));
    let shifts = ShiftScheduleService::new().shifts_for_date(&employee, monday());
    assert_eq!(shifts, vec![shift(1200, 1440)]);
}

#[test]
fn exact_duplicates_are_removed_and_overlaps_dropped() {
    let employee = employee_with(
        "monday",
        json!(["09:00-13:00", "09:00-13:00", "12:00-15:00"]),
    );
    let shifts = ShiftScheduleService::new().shifts_for_date(&employee, monday());
    assert_eq!(shifts, vec![shift(540, 780)]);
}

#[test]
fn output_is_idempotent_and_order_stable() {
    let employee = employee_with("monday", json!(["14:00-18:00", "09:00-13:00"]));
    let parser = ShiftScheduleService::new();
    let first = parser.shifts_for_date(&employee, monday());
    let second = parser.shifts_for_date(&employee, monday());
    assert_eq!(first, second);
}
