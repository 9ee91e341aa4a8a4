pub mod availability;
pub mod conflict;
pub mod roster;
pub mod sequencing;
pub mod shifts;
pub mod time;
