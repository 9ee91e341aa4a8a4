use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::{debug, warn};
use uuid::Uuid;

use shared_models::{BookingConflict, BookingRecord};

use crate::services::time::{self, MINUTES_PER_DAY};

/// Read-only lookup of committed booking segments per employee per
/// date, built fresh from a booking snapshot before each scheduling
/// query. All stored times are integer minutes; overlap checks never
/// re-parse or compare heterogeneous formats.
#[derive(Debug, Default)]
pub struct ConflictIndex {
    entries: HashMap<Uuid, HashMap<String, Vec<BookingConflict>>>,
}

impl ConflictIndex {
    /// Index a booking snapshot. Each booking yields one conflict per
    /// service segment; segments whose times cannot be parsed are
    /// skipped with a diagnostic rather than aborting the build.
    pub fn build(bookings: &[BookingRecord]) -> Self {
        let mut entries: HashMap<Uuid, HashMap<String, Vec<BookingConflict>>> = HashMap::new();

        for booking in bookings {
            for segment in &booking.segments {
                let start = match time::parse_time(&segment.start_time) {
                    Ok(minute) => minute,
                    Err(error) => {
                        warn!(
                            "Skipping segment of booking {}: {}",
                            booking.booking_id, error
                        );
                        continue;
                    }
                };
                let end = match time::parse_time(&segment.end_time) {
                    Ok(minute) => minute,
                    Err(error) => {
                        warn!(
                            "Skipping segment of booking {}: {}",
                            booking.booking_id, error
                        );
                        continue;
                    }
                };
                let end = if end == 0 { MINUTES_PER_DAY } else { end };
                if start >= end {
                    warn!(
                        "Skipping inverted segment {}-{} of booking {}",
                        segment.start_time, segment.end_time, booking.booking_id
                    );
                    continue;
                }

                entries
                    .entry(segment.employee_id)
                    .or_default()
                    .entry(time::date_key(booking.date))
                    .or_default()
                    .push(BookingConflict {
                        employee_id: segment.employee_id,
                        date: booking.date,
                        start,
                        end,
                        source_booking_id: booking.booking_id,
                    });
            }
        }

        for per_date in entries.values_mut() {
            for conflicts in per_date.values_mut() {
                conflicts.sort_by_key(|conflict| (conflict.start, conflict.end));
            }
        }

        let total: usize = entries
            .values()
            .flat_map(|per_date| per_date.values())
            .map(Vec::len)
            .sum();
        debug!("Built conflict index with {} segments", total);

        Self { entries }
    }

    /// Committed segments for one employee on one date. Empty slice
    /// when there are none; lookups never fail.
    pub fn conflicts_for(&self, employee_id: Uuid, date: NaiveDate) -> &[BookingConflict] {
        self.entries
            .get(&employee_id)
            .and_then(|per_date| per_date.get(&time::date_key(date)))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Half-open overlap test of `[start, end)` against the employee's
    /// committed segments. Adjacent back-to-back ranges do not overlap.
    pub fn has_overlap(&self, employee_id: Uuid, date: NaiveDate, start: i32, end: i32) -> bool {
        self.conflicts_for(employee_id, date)
            .iter()
            .any(|conflict| start < conflict.end && end > conflict.start)
    }
}
