// libs/scheduling-cell/tests/draft_test.rs

use chrono::NaiveDate;
use std::cell::RefCell;
use std::rc::Rc;
use uuid::Uuid;

use scheduling_cell::{BookingDraft, DraftObserver, DraftSession};
use shared_models::{SequenceCandidate, SequencedService};

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 9, 7).unwrap()
}

fn candidate_for(massage: Uuid, facial: Uuid, anna: Uuid, boris: Uuid) -> SequenceCandidate {
    SequenceCandidate {
        anchor_start: 600,
        sequence: vec![
            SequencedService {
                service_id: massage,
                employee_id: anna,
                start_time: 600,
                end_time: 660,
            },
            SequencedService {
                service_id: facial,
                employee_id: boris,
                start_time: 660,
                end_time: 705,
            },
        ],
    }
}

#[test]
fn transitions_build_up_a_ready_draft() {
    let massage = Uuid::new_v4();
    let facial = Uuid::new_v4();
    let anna = Uuid::new_v4();
    let boris = Uuid::new_v4();

    let draft = BookingDraft::new()
        .with_date(monday())
        .with_service(massage)
        .with_service(facial);
    assert!(!draft.is_ready());

    let resolved = draft.with_sequence(&candidate_for(massage, facial, anna, boris));
    assert!(resolved.is_ready());
    assert_eq!(resolved.selections[0].employee_id, Some(anna));
    assert_eq!(resolved.selections[0].start_time, Some(600));
    assert_eq!(resolved.selections[1].start_time, Some(660));
    assert_eq!(resolved.selections[1].end_time, Some(705));
}

#[test]
fn changing_the_date_clears_resolved_times() {
    let massage = Uuid::new_v4();
    let anna = Uuid::new_v4();
    let candidate = SequenceCandidate {
        anchor_start: 600,
        sequence: vec![SequencedService {
            service_id: massage,
            employee_id: anna,
            start_time: 600,
            end_time: 660,
        }],
    };

    let resolved = BookingDraft::new()
        .with_date(monday())
        .with_service(massage)
        .with_sequence(&candidate);
    assert!(resolved.is_ready());

    let tuesday = NaiveDate::from_ymd_opt(2026, 9, 8).unwrap();
    let moved = resolved.with_date(tuesday);
    assert!(!moved.is_ready());
    assert_eq!(moved.selections[0].start_time, None);
    // The professional choice survives a date change.
    assert_eq!(moved.selections[0].employee_id, Some(anna));
}

#[test]
fn reassignment_clears_only_that_selections_times() {
    let massage = Uuid::new_v4();
    let facial = Uuid::new_v4();
    let anna = Uuid::new_v4();
    let boris = Uuid::new_v4();
    let clara = Uuid::new_v4();

    let resolved = BookingDraft::new()
        .with_date(monday())
        .with_service(massage)
        .with_service(facial)
        .with_sequence(&candidate_for(massage, facial, anna, boris));

    let reassigned = resolved.with_assignment(facial, clara);
    assert_eq!(reassigned.selections[0].start_time, Some(600));
    assert_eq!(reassigned.selections[1].employee_id, Some(clara));
    assert_eq!(reassigned.selections[1].start_time, None);
    assert!(!reassigned.is_ready());
}

#[test]
fn removing_a_service_invalidates_the_chain() {
    let massage = Uuid::new_v4();
    let facial = Uuid::new_v4();
    let anna = Uuid::new_v4();
    let boris = Uuid::new_v4();

    let resolved = BookingDraft::new()
        .with_date(monday())
        .with_service(massage)
        .with_service(facial)
        .with_sequence(&candidate_for(massage, facial, anna, boris));

    let trimmed = resolved.without_service(massage);
    assert_eq!(trimmed.selections.len(), 1);
    assert_eq!(trimmed.selections[0].service_id, facial);
    assert_eq!(trimmed.selections[0].start_time, None);
}

struct RecordingObserver {
    seen: Rc<RefCell<Vec<BookingDraft>>>,
}

impl DraftObserver for RecordingObserver {
    fn draft_changed(&self, draft: &BookingDraft) {
        self.seen.borrow_mut().push(draft.clone());
    }
}

#[test]
fn session_notifies_only_on_actual_change() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut session = DraftSession::new(BookingDraft::new());
    session.subscribe(Box::new(RecordingObserver { seen: Rc::clone(&seen) }));

    session.apply(|draft| draft.with_date(monday()));
    assert_eq!(seen.borrow().len(), 1);

    // Same date again: no change, no notification.
    session.apply(|draft| draft.with_date(monday()));
    assert_eq!(seen.borrow().len(), 1);

    let service_id = Uuid::new_v4();
    session.apply(|draft| draft.with_service(service_id));
    assert_eq!(seen.borrow().len(), 2);
    assert_eq!(session.draft().selections.len(), 1);
}
