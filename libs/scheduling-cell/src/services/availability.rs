use chrono::NaiveDate;
use tracing::debug;

use shared_models::{CandidateSlot, Employee};

use crate::models::SchedulingError;
use crate::services::conflict::ConflictIndex;
use crate::services::shifts::ShiftScheduleService;

/// Step granularity is a UX choice (how dense the time buttons are),
/// not a correctness constraint.
pub const DEFAULT_STEP_MINUTES: i32 = 10;

/// Computes valid start times for one service/employee/date
/// combination by walking the employee's shifts at a fixed step.
#[derive(Debug)]
pub struct AvailabilityService {
    shifts: ShiftScheduleService,
    step_minutes: i32,
}

impl Default for AvailabilityService {
    fn default() -> Self {
        Self::new()
    }
}

impl AvailabilityService {
    pub fn new() -> Self {
        Self::with_step(DEFAULT_STEP_MINUTES)
    }

    pub fn with_step(step_minutes: i32) -> Self {
        Self {
            shifts: ShiftScheduleService::new(),
            step_minutes,
        }
    }

    /// All valid start times (minutes since midnight, ascending) for a
    /// service of `duration_minutes` on `date`.
    ///
    /// Candidates are enumerated independently per shift and unioned;
    /// a start whose service would run past its own shift's end is
    /// invalid even when a later shift exists, so gaps between split
    /// shifts are never bridged. A service ending exactly at the shift
    /// end is valid.
    pub fn valid_starts(
        &self,
        employee: &Employee,
        date: NaiveDate,
        duration_minutes: i32,
        index: &ConflictIndex,
    ) -> Result<Vec<i32>, SchedulingError> {
        if duration_minutes <= 0 {
            return Err(SchedulingError::InvalidDuration(duration_minutes));
        }

        let shifts = self.shifts.shifts_for_date(employee, date);
        let mut starts = Vec::new();

        for shift in &shifts {
            let mut candidate = shift.start;
            while candidate + duration_minutes <= shift.end {
                if !index.has_overlap(employee.id, date, candidate, candidate + duration_minutes) {
                    starts.push(candidate);
                }
                candidate += self.step_minutes;
            }
        }

        starts.sort_unstable();
        starts.dedup();
        debug!(
            "Employee {} on {}: {} valid starts across {} shifts",
            employee.id,
            date,
            starts.len(),
            shifts.len()
        );
        Ok(starts)
    }

    /// The full candidate grid for the day, with booked or
    /// out-of-shift-tail candidates flagged unavailable so the
    /// presentation layer can render them disabled instead of hiding
    /// them.
    pub fn slot_grid(
        &self,
        employee: &Employee,
        date: NaiveDate,
        duration_minutes: i32,
        index: &ConflictIndex,
    ) -> Result<Vec<CandidateSlot>, SchedulingError> {
        if duration_minutes <= 0 {
            return Err(SchedulingError::InvalidDuration(duration_minutes));
        }

        let shifts = self.shifts.shifts_for_date(employee, date);
        let mut grid = Vec::new();

        for shift in &shifts {
            let mut candidate = shift.start;
            while candidate < shift.end {
                let end = candidate + duration_minutes;
                let fits = end <= shift.end;
                let free = fits && !index.has_overlap(employee.id, date, candidate, end);
                grid.push(CandidateSlot {
                    start_time: candidate,
                    end_time: end,
                    available: free,
                });
                candidate += self.step_minutes;
            }
        }

        grid.sort_by_key(|slot| slot.start_time);
        grid.dedup_by_key(|slot| slot.start_time);
        Ok(grid)
    }
}
