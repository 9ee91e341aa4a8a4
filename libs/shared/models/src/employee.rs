use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// One contiguous working window, in minutes since local midnight.
///
/// `end` may be 1440 to represent a shift that runs until end-of-day
/// midnight (e.g. a `20:00-00:00` evening shift). Invariant:
/// `0 <= start < end <= 1440`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftInterval {
    pub start: i32,
    pub end: i32,
}

impl ShiftInterval {
    /// Whether `[start, end)` fits entirely inside this shift.
    /// A range ending exactly at the shift end is contained.
    pub fn contains(&self, start: i32, end: i32) -> bool {
        self.start <= start && end <= self.end
    }

    /// Half-open overlap test against another interval.
    pub fn overlaps(&self, other: &ShiftInterval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A single `{startTime, endTime}` shift entry as it appears on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftFields {
    pub start_time: String,
    pub end_time: String,
}

/// A weekday entry expressed as a working flag with companion times.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlaggedDay {
    pub is_working: bool,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
}

/// A weekday entry that nests its shifts under a `shiftsData` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NestedShifts {
    pub shifts_data: Vec<ShiftFields>,
}

/// Every schedule shape the booking backend is known to emit for one
/// weekday. Deserialization is the only place these shapes are told
/// apart; everything downstream consumes normalized `ShiftInterval`s
/// from the shift parser.
///
/// Variant order matters for `untagged`: objects with required
/// discriminating keys come before the permissive ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DaySchedule {
    /// `{ "shiftsData": [{ "startTime": ..., "endTime": ... }] }`
    Nested(NestedShifts),
    /// `{ "isWorking": true, "startTime": ..., "endTime": ... }`
    Flagged(FlaggedDay),
    /// `[{ "startTime": ..., "endTime": ... }, ...]`
    ShiftList(Vec<ShiftFields>),
    /// `["09:00-13:00", "14:00-18:00"]`
    RangeList(Vec<String>),
    /// `{ "startTime": ..., "endTime": ... }`
    Shift(ShiftFields),
    /// `"09:00-13:00, 14:00-18:00"`
    Ranges(String),
}

/// Date-specific schedule override (vacation, sick leave). Takes
/// precedence over the recurring weekday pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleOverride {
    pub date: NaiveDate,
    pub is_working: bool,
    #[serde(default)]
    pub reason: Option<String>,
}

/// Recurring weekly pattern plus date-specific overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkSchedule {
    /// Keyed by lowercase weekday name ("monday" ... "sunday").
    /// A missing key means the employee does not work that day.
    #[serde(default)]
    pub weekly: HashMap<String, DaySchedule>,
    #[serde(default)]
    pub overrides: Vec<ScheduleOverride>,
}

/// A professional as returned by the employee directory provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    pub is_active: bool,
    #[serde(default)]
    pub work_schedule: WorkSchedule,
}

/// Lookup key into `WorkSchedule::weekly` for a chrono weekday.
pub fn weekday_key(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}
