use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};
use uuid::Uuid;

use shared_models::{weekday_key, DaySchedule, Employee, ShiftFields, ShiftInterval};

use crate::services::time::{self, MINUTES_PER_DAY};

/// The single normalization boundary for work schedules.
///
/// The booking backend emits at least six different shapes for one
/// weekday's schedule; all of them are folded into a sorted list of
/// `ShiftInterval`s here, and no shape-sniffing exists anywhere else.
#[derive(Debug, Default)]
pub struct ShiftScheduleService;

impl ShiftScheduleService {
    pub fn new() -> Self {
        Self
    }

    /// Resolve the shift intervals an employee works on `date`.
    ///
    /// A date-specific `isWorking: false` override wins over the
    /// recurring weekday pattern. No weekday entry and no override
    /// means the employee does not work that day; there is no
    /// always-available fallback.
    ///
    /// Malformed individual entries are dropped with a diagnostic so a
    /// single bad entry cannot hide the employee's other valid shifts.
    pub fn shifts_for_date(&self, employee: &Employee, date: NaiveDate) -> Vec<ShiftInterval> {
        if let Some(entry) = employee
            .work_schedule
            .overrides
            .iter()
            .find(|entry| entry.date == date)
        {
            if !entry.is_working {
                debug!(
                    "Employee {} has a not-working override on {}",
                    employee.id, date
                );
                return Vec::new();
            }
        }

        let key = weekday_key(date.weekday());
        let Some(descriptor) = employee.work_schedule.weekly.get(key) else {
            debug!("Employee {} has no schedule entry for {}", employee.id, key);
            return Vec::new();
        };

        let mut intervals = self.normalize(descriptor, employee.id);
        intervals.sort_by_key(|shift| (shift.start, shift.end));
        intervals.dedup();

        let mut accepted: Vec<ShiftInterval> = Vec::with_capacity(intervals.len());
        for shift in intervals {
            if let Some(previous) = accepted.last() {
                if shift.start < previous.end {
                    warn!(
                        "Dropping shift {}-{} for employee {}: overlaps accepted shift {}-{}",
                        shift.start, shift.end, employee.id, previous.start, previous.end
                    );
                    continue;
                }
            }
            accepted.push(shift);
        }
        accepted
    }

    fn normalize(&self, descriptor: &DaySchedule, employee_id: Uuid) -> Vec<ShiftInterval> {
        match descriptor {
            DaySchedule::Ranges(text) => text
                .split(',')
                .filter(|range| !range.trim().is_empty())
                .filter_map(|range| self.parse_range(range, employee_id))
                .collect(),
            DaySchedule::RangeList(ranges) => ranges
                .iter()
                .filter_map(|range| self.parse_range(range, employee_id))
                .collect(),
            DaySchedule::Shift(fields) => {
                self.parse_fields(fields, employee_id).into_iter().collect()
            }
            DaySchedule::ShiftList(entries) => entries
                .iter()
                .filter_map(|fields| self.parse_fields(fields, employee_id))
                .collect(),
            DaySchedule::Nested(nested) => nested
                .shifts_data
                .iter()
                .filter_map(|fields| self.parse_fields(fields, employee_id))
                .collect(),
            DaySchedule::Flagged(day) => {
                if !day.is_working {
                    return Vec::new();
                }
                match (day.start_time.as_deref(), day.end_time.as_deref()) {
                    (Some(start), Some(end)) => {
                        self.parse_pair(start, end, employee_id).into_iter().collect()
                    }
                    _ => {
                        warn!(
                            "Employee {} is flagged working but has no shift times",
                            employee_id
                        );
                        Vec::new()
                    }
                }
            }
        }
    }

    fn parse_range(&self, range: &str, employee_id: Uuid) -> Option<ShiftInterval> {
        let trimmed = range.trim();
        let Some((start, end)) = trimmed.split_once('-') else {
            warn!(
                "Dropping shift entry '{}' for employee {}: not a start-end range",
                trimmed, employee_id
            );
            return None;
        };
        self.parse_pair(start.trim(), end.trim(), employee_id)
    }

    fn parse_fields(&self, fields: &ShiftFields, employee_id: Uuid) -> Option<ShiftInterval> {
        self.parse_pair(&fields.start_time, &fields.end_time, employee_id)
    }

    fn parse_pair(&self, start: &str, end: &str, employee_id: Uuid) -> Option<ShiftInterval> {
        let start_minute = match time::parse_time(start) {
            Ok(minute) => minute,
            Err(error) => {
                warn!(
                    "Dropping shift entry for employee {}: {}",
                    employee_id, error
                );
                return None;
            }
        };
        let end_minute = match time::parse_time(end) {
            Ok(minute) => minute,
            Err(error) => {
                warn!(
                    "Dropping shift entry for employee {}: {}",
                    employee_id, error
                );
                return None;
            }
        };

        // An end of 00:00 means the shift runs to end-of-day midnight.
        let end_minute = if end_minute == 0 {
            MINUTES_PER_DAY
        } else {
            end_minute
        };

        if start_minute >= end_minute {
            warn!(
                "Dropping inverted shift {}-{} for employee {}",
                start, end, employee_id
            );
            return None;
        }

        Some(ShiftInterval {
            start: start_minute,
            end: end_minute,
        })
    }
}
