use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use shared_models::{Employee, Service};

use crate::models::{ProfessionalAvailability, SchedulingError};
use crate::services::availability::AvailabilityService;
use crate::services::conflict::ConflictIndex;

/// "Any professional" mode: filters a roster to the employees with at
/// least one valid slot for the service that day.
#[derive(Debug, Default)]
pub struct RosterService {
    availability: AvailabilityService,
}

impl RosterService {
    pub fn new() -> Self {
        Self {
            availability: AvailabilityService::new(),
        }
    }

    pub fn with_step(step_minutes: i32) -> Self {
        Self {
            availability: AvailabilityService::with_step(step_minutes),
        }
    }

    /// Every active employee with a non-empty slot list for the
    /// service on `date`, paired with their slots. Inactive employees
    /// are excluded before computation, not merely hidden from display.
    pub fn professionals_with_availability(
        &self,
        service: &Service,
        date: NaiveDate,
        roster: &[Employee],
        index: &ConflictIndex,
    ) -> Result<Vec<ProfessionalAvailability>, SchedulingError> {
        let mut eligible = Vec::new();

        for employee in roster.iter().filter(|employee| employee.is_active) {
            let slots =
                self.availability
                    .valid_starts(employee, date, service.duration_minutes, index)?;
            if slots.is_empty() {
                continue;
            }
            eligible.push(ProfessionalAvailability {
                employee: employee.clone(),
                slots,
            });
        }

        debug!(
            "{} of {} roster employees have availability for '{}' on {}",
            eligible.len(),
            roster.len(),
            service.name,
            date
        );
        Ok(eligible)
    }
}

/// Uniform random pick over the eligible set. This is a deliberate,
/// separate policy step the caller invokes at confirmation time; the
/// aggregator itself never assigns anyone.
pub fn pick_random<'a, R: Rng + ?Sized>(
    rng: &mut R,
    eligible: &'a [ProfessionalAvailability],
) -> Option<&'a ProfessionalAvailability> {
    eligible.choose(rng)
}
