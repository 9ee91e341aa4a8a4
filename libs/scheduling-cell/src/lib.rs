pub mod draft;
pub mod models;
pub mod services;

// Re-export the engine surface for external use
pub use draft::{BookingDraft, DraftObserver, DraftSelection, DraftSession};
pub use models::{ProfessionalAvailability, SchedulingError};
pub use services::availability::{AvailabilityService, DEFAULT_STEP_MINUTES};
pub use services::conflict::ConflictIndex;
pub use services::roster::{pick_random, RosterService};
pub use services::sequencing::SequenceScheduler;
pub use services::shifts::ShiftScheduleService;
