use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

use shared_models::{Employee, SequenceCandidate, SequencedService, Service, ShiftInterval};

use crate::models::SchedulingError;
use crate::services::availability::DEFAULT_STEP_MINUTES;
use crate::services::conflict::ConflictIndex;
use crate::services::shifts::ShiftScheduleService;

/// Finds anchor start times for multi-service bookings performed
/// strictly back-to-back in list order, where each service may be
/// assigned to a different professional.
#[derive(Debug)]
pub struct SequenceScheduler {
    shifts: ShiftScheduleService,
    step_minutes: i32,
}

impl Default for SequenceScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceScheduler {
    pub fn new() -> Self {
        Self::with_step(DEFAULT_STEP_MINUTES)
    }

    pub fn with_step(step_minutes: i32) -> Self {
        Self {
            shifts: ShiftScheduleService::new(),
            step_minutes,
        }
    }

    /// All anchors from which the services can run back-to-back such
    /// that every service's interval sits inside a shift of its own
    /// assigned professional and overlaps none of that professional's
    /// committed segments.
    ///
    /// `assignments` maps service id to the assigned professional. Any
    /// service without an assignment fails fast with
    /// `MissingAssignment`; scheduling is not attempted. An empty
    /// result (nothing fits that day) is a normal outcome.
    pub fn valid_sequence_starts(
        &self,
        services: &[Service],
        assignments: &HashMap<Uuid, Employee>,
        date: NaiveDate,
        index: &ConflictIndex,
    ) -> Result<Vec<SequenceCandidate>, SchedulingError> {
        if services.is_empty() {
            return Ok(Vec::new());
        }

        let mut resolved: Vec<(&Service, &Employee)> = Vec::with_capacity(services.len());
        for service in services {
            if service.duration_minutes <= 0 {
                return Err(SchedulingError::InvalidDuration(service.duration_minutes));
            }
            let professional = assignments.get(&service.id).ok_or_else(|| {
                SchedulingError::MissingAssignment {
                    service_name: service.name.clone(),
                }
            })?;
            resolved.push((service, professional));
        }

        let mut shift_cache: HashMap<Uuid, Vec<ShiftInterval>> = HashMap::new();
        for &(_, professional) in &resolved {
            shift_cache
                .entry(professional.id)
                .or_insert_with(|| self.shifts.shifts_for_date(professional, date));
        }

        let total_duration: i32 = services.iter().map(|service| service.duration_minutes).sum();
        debug!(
            "Sequencing {} services ({} min total) on {}",
            services.len(),
            total_duration,
            date
        );

        // Service 0 starts at the anchor, so only anchors inside the
        // first professional's shifts can ever produce a valid walk.
        let first_duration = resolved[0].0.duration_minutes;
        let first_shifts = &shift_cache[&resolved[0].1.id];

        let mut candidates = Vec::new();
        for shift in first_shifts {
            let mut anchor = shift.start;
            while anchor + first_duration <= shift.end {
                if let Some(sequence) = self.walk(anchor, &resolved, &shift_cache, date, index) {
                    candidates.push(SequenceCandidate {
                        anchor_start: anchor,
                        sequence,
                    });
                }
                anchor += self.step_minutes;
            }
        }

        candidates.sort_by_key(|candidate| candidate.anchor_start);
        candidates.dedup_by_key(|candidate| candidate.anchor_start);
        debug!("Found {} valid anchors", candidates.len());
        Ok(candidates)
    }

    /// Walk the services in order from `anchor`, advancing the cursor
    /// to each interval's end. The first service that falls outside its
    /// professional's shifts or overlaps a committed segment rejects
    /// the anchor entirely; no reordering, no gap insertion.
    fn walk(
        &self,
        anchor: i32,
        resolved: &[(&Service, &Employee)],
        shift_cache: &HashMap<Uuid, Vec<ShiftInterval>>,
        date: NaiveDate,
        index: &ConflictIndex,
    ) -> Option<Vec<SequencedService>> {
        let mut cursor = anchor;
        let mut sequence = Vec::with_capacity(resolved.len());

        for (service, professional) in resolved {
            let start = cursor;
            let end = cursor + service.duration_minutes;

            let inside_shift = shift_cache[&professional.id]
                .iter()
                .any(|shift| shift.contains(start, end));
            if !inside_shift {
                return None;
            }
            if index.has_overlap(professional.id, date, start, end) {
                return None;
            }

            sequence.push(SequencedService {
                service_id: service.id,
                employee_id: professional.id,
                start_time: start,
                end_time: end,
            });
            cursor = end;
        }

        Some(sequence)
    }
}
