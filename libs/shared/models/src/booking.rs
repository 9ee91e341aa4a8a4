use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bookable service from the catalog provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    pub duration_minutes: i32,
    pub price: f64,
}

/// One already-committed service segment of an existing booking, as
/// returned by the booking-conflict provider. Times arrive in whatever
/// format the backend stored them; they are normalized to minutes when
/// the conflict index is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedSegment {
    pub employee_id: Uuid,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub service_name: Option<String>,
}

/// An existing booking. A booking that aggregates several services
/// carries one segment per service, possibly with different
/// professionals and time windows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub booking_id: Uuid,
    pub date: NaiveDate,
    pub segments: Vec<BookedSegment>,
}

/// A normalized committed segment for one employee on one date.
/// Start/end are minutes since local midnight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingConflict {
    pub employee_id: Uuid,
    pub date: NaiveDate,
    pub start: i32,
    pub end: i32,
    pub source_booking_id: Uuid,
}

/// A candidate start for a single-service booking, for the
/// presentation layer to render as a time button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateSlot {
    pub start_time: i32,
    pub end_time: i32,
    pub available: bool,
}

/// One concretely-timed service inside a multi-service sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SequencedService {
    pub service_id: Uuid,
    pub employee_id: Uuid,
    pub start_time: i32,
    pub end_time: i32,
}

/// A valid anchor for a back-to-back multi-service booking, carrying
/// the fully resolved per-service intervals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceCandidate {
    pub anchor_start: i32,
    pub sequence: Vec<SequencedService>,
}
