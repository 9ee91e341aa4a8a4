use chrono::NaiveDate;
use uuid::Uuid;

use shared_models::SequenceCandidate;

/// One service selection inside a draft: the professional and the
/// concrete times stay unset until the caller resolves them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftSelection {
    pub service_id: Uuid,
    pub employee_id: Option<Uuid>,
    pub start_time: Option<i32>,
    pub end_time: Option<i32>,
}

impl DraftSelection {
    fn new(service_id: Uuid) -> Self {
        Self {
            service_id,
            employee_id: None,
            start_time: None,
            end_time: None,
        }
    }

    fn clear_times(&mut self) {
        self.start_time = None;
        self.end_time = None;
    }
}

/// A booking in progress, owned by the caller and threaded through the
/// flow explicitly. Transitions return new values instead of mutating
/// shared state, so two concurrent flows can never observe each
/// other's half-finished drafts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingDraft {
    pub date: Option<NaiveDate>,
    pub selections: Vec<DraftSelection>,
}

impl BookingDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose the booking date. Previously resolved times belong to
    /// the old date and are cleared.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        if self.date != Some(date) {
            self.date = Some(date);
            for selection in &mut self.selections {
                selection.clear_times();
            }
        }
        self
    }

    /// Append a service to the sequence, in performance order.
    pub fn with_service(mut self, service_id: Uuid) -> Self {
        self.selections.push(DraftSelection::new(service_id));
        self
    }

    /// Remove a service. Later services shift earlier in the sequence,
    /// so every resolved time becomes stale and is cleared.
    pub fn without_service(mut self, service_id: Uuid) -> Self {
        let before = self.selections.len();
        self.selections
            .retain(|selection| selection.service_id != service_id);
        if self.selections.len() != before {
            for selection in &mut self.selections {
                selection.clear_times();
            }
        }
        self
    }

    /// Assign a professional to one service. The selection's times are
    /// cleared; availability must be recomputed for the new assignee.
    pub fn with_assignment(mut self, service_id: Uuid, employee_id: Uuid) -> Self {
        for selection in &mut self.selections {
            if selection.service_id == service_id {
                selection.employee_id = Some(employee_id);
                selection.clear_times();
            }
        }
        self
    }

    /// Apply a sequence candidate produced by the scheduler, filling
    /// professional and concrete times for every matching selection.
    pub fn with_sequence(mut self, candidate: &SequenceCandidate) -> Self {
        for resolved in &candidate.sequence {
            for selection in &mut self.selections {
                if selection.service_id == resolved.service_id {
                    selection.employee_id = Some(resolved.employee_id);
                    selection.start_time = Some(resolved.start_time);
                    selection.end_time = Some(resolved.end_time);
                }
            }
        }
        self
    }

    /// Whether every selection is fully resolved and the draft can be
    /// submitted for server-side re-validation.
    pub fn is_ready(&self) -> bool {
        self.date.is_some()
            && !self.selections.is_empty()
            && self.selections.iter().all(|selection| {
                selection.employee_id.is_some()
                    && selection.start_time.is_some()
                    && selection.end_time.is_some()
            })
    }
}

/// Change notification for draft consumers (summary panels, price
/// displays). Replaces ambient global events with an explicit
/// subscription surface.
pub trait DraftObserver {
    fn draft_changed(&self, draft: &BookingDraft);
}

/// Owns the current draft for one booking flow and notifies observers
/// when a transition actually changes it.
#[derive(Default)]
pub struct DraftSession {
    draft: BookingDraft,
    observers: Vec<Box<dyn DraftObserver>>,
}

impl DraftSession {
    pub fn new(draft: BookingDraft) -> Self {
        Self {
            draft,
            observers: Vec::new(),
        }
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn subscribe(&mut self, observer: Box<dyn DraftObserver>) {
        self.observers.push(observer);
    }

    /// Run a transition against the current draft. Observers are
    /// notified only when the resulting value differs.
    pub fn apply<F>(&mut self, transition: F)
    where
        F: FnOnce(BookingDraft) -> BookingDraft,
    {
        let next = transition(self.draft.clone());
        if next != self.draft {
            self.draft = next;
            for observer in &self.observers {
                observer.draft_changed(&self.draft);
            }
        }
    }
}
