use serde::Serialize;
use shared_models::Employee;
use thiserror::Error;

/// Error taxonomy for the availability engine.
///
/// Zero valid slots is never an error: a fully booked day, a shift too
/// short for the service, or an employee who is simply off all produce
/// `Ok` with an empty result so the caller can tell "no availability"
/// apart from "invalid request".
#[derive(Debug, Error)]
pub enum SchedulingError {
    #[error("Unrecognized time format: {0}")]
    TimeFormat(String),

    #[error("Minute value {0} is outside the valid day range")]
    MinutesOutOfRange(i32),

    #[error("No professional assigned to service: {service_name}")]
    MissingAssignment { service_name: String },

    #[error("Invalid service duration: {0} minutes")]
    InvalidDuration(i32),
}

/// An employee paired with their valid start times for one service on
/// one date. Produced by the roster aggregator for "any professional"
/// selection mode.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalAvailability {
    pub employee: Employee,
    /// Valid start times in minutes since midnight, ascending.
    pub slots: Vec<i32>,
}
