//! Per-entity controller state.
//!
//! `EntityManager` owns one panel's cached collection and the independent
//! state of each concern (list, submit, search, delete). It never performs
//! I/O itself: each `begin_*` method decides whether a request is needed and
//! returns it, the caller runs the matching function from [`ops`], and the
//! result is fed back through the corresponding `finish_*` method. A failure
//! in one concern only touches that concern's state.

mod confirm;
mod form;
pub mod ops;

pub use confirm::DeleteConfirm;
pub use form::FormModal;
use ops::Reconciliation;

use serde_json::Value;

use crate::TABLE_PREVIEW_ROWS;
use crate::display::most_recent;
use crate::draft::Draft;
use crate::error::ApiError;
use crate::gateway::ApiRequest;
use crate::model::{Entity, RecordId};
use crate::summary::{Summary, summarize};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListState {
    pub loading: bool,
    /// Set once the first load attempt has completed, successfully or not.
    pub loaded: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitKind {
    Create,
    Update,
}

impl SubmitKind {
    pub fn verb(self) -> &'static str {
        match self {
            SubmitKind::Create => "added",
            SubmitKind::Update => "updated",
        }
    }
}

/// The submit in flight and the form session it was sent from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingSubmit {
    pub kind: SubmitKind,
    pub session: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmitState {
    pub in_progress: bool,
    pub error: Option<String>,
    pub pending: Option<PendingSubmit>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RemoveState {
    pub in_progress: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<E> {
    Idle,
    Found(E),
    NotFound,
    Failed(String),
}

impl<E> Default for SearchOutcome<E> {
    fn default() -> Self {
        SearchOutcome::Idle
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchState<E> {
    pub query: String,
    pub in_progress: bool,
    pub outcome: SearchOutcome<E>,
}

impl<E> Default for SearchState<E> {
    fn default() -> Self {
        Self { query: String::new(), in_progress: false, outcome: SearchOutcome::Idle }
    }
}

/// What the panel body should show in place of (or above) the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelStatus<'a> {
    /// First load still in flight.
    Loading,
    /// Load failed and there is nothing cached to show.
    Unavailable(&'a str),
    Ready,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntityManager<E: Entity> {
    records: Vec<E>,
    pub list: ListState,
    pub submit: SubmitState,
    pub search: SearchState<E>,
    pub form: FormModal,
    pub confirm: DeleteConfirm,
    pub remove: RemoveState,
}

impl<E: Entity> Default for EntityManager<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> EntityManager<E> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            list: ListState::default(),
            submit: SubmitState::default(),
            search: SearchState::default(),
            form: FormModal::closed(E::DESCRIPTOR),
            confirm: DeleteConfirm::default(),
            remove: RemoveState::default(),
        }
    }

    /// The cached collection, in server order.
    pub fn records(&self) -> &[E] {
        &self.records
    }

    /// Rows shown in the table.
    pub fn preview(&self) -> &[E] {
        &self.records[..self.records.len().min(TABLE_PREVIEW_ROWS)]
    }

    pub fn summary(&self) -> Summary {
        summarize(&self.records)
    }

    /// Newest records for the activity strip; empty for entities without one.
    pub fn recent(&self) -> Vec<&E> {
        match &E::DESCRIPTOR.recent {
            Some(spec) => most_recent(&self.records, spec),
            None => Vec::new(),
        }
    }

    pub fn status(&self) -> PanelStatus<'_> {
        if let Some(error) = &self.list.error {
            if self.records.is_empty() {
                return PanelStatus::Unavailable(error.as_str());
            }
        }
        if self.list.loading && !self.list.loaded {
            return PanelStatus::Loading;
        }
        PanelStatus::Ready
    }

    // ---- list ----

    pub fn begin_load(&mut self) -> ApiRequest {
        self.list.loading = true;
        ApiRequest::get(E::DESCRIPTOR.list_path())
    }

    pub fn finish_load(&mut self, outcome: Result<Vec<E>, ApiError>) {
        self.list.loading = false;
        self.list.loaded = true;
        match outcome {
            Ok(records) => {
                self.records = records;
                self.list.error = None;
            }
            Err(err) => {
                self.list.error = Some(format!(
                    "Failed to fetch {}: {}",
                    E::DESCRIPTOR.title.to_lowercase(),
                    err
                ));
            }
        }
    }

    // ---- form ----

    pub fn open_create(&mut self) {
        self.submit.error = None;
        self.form.show(Draft::empty(E::DESCRIPTOR));
    }

    pub fn open_edit(&mut self, record: &E) {
        self.submit.error = None;
        self.form.show(Draft::from_record(record));
    }

    pub fn close_form(&mut self) {
        self.submit.error = None;
        self.form.close(E::DESCRIPTOR);
    }

    pub fn change_field(&mut self, field: &str, value: impl Into<String>) {
        self.form.draft.set(field, value);
    }

    /// Validates the draft and builds the create or update request.
    ///
    /// Returns `None` when nothing should be sent: a submit is already in
    /// flight, a required field is blank, or a numeric field does not parse.
    /// Only the last case sets an inline error.
    pub fn begin_submit(&mut self) -> Option<ApiRequest> {
        if self.submit.in_progress {
            return None;
        }
        let payload = match self.form.draft.to_payload(E::DESCRIPTOR) {
            Ok(payload) => Value::Object(payload),
            Err(err) if err.is_missing() => {
                log::debug!("{} submit skipped: {}", E::DESCRIPTOR.key, err);
                return None;
            }
            Err(err) => {
                self.submit.error = Some(err.to_string());
                return None;
            }
        };

        let (kind, request) = match self.form.draft.id {
            Some(id) => (SubmitKind::Update, ApiRequest::put(E::DESCRIPTOR.item_path(id), payload)),
            None => (SubmitKind::Create, ApiRequest::post(E::DESCRIPTOR.collection_path, payload)),
        };
        self.submit.in_progress = true;
        self.submit.error = None;
        self.submit.pending = Some(PendingSubmit { kind, session: self.form.session() });
        Some(request)
    }

    /// Applies a submit outcome and returns what was saved on success.
    ///
    /// The cache is always reconciled with a successful save. The modal is
    /// only touched while it still shows the draft that was submitted: on
    /// success it closes, on failure it stays open with the error inline.
    /// A modal reopened in the meantime keeps its own draft.
    pub fn finish_submit(&mut self, outcome: Result<Reconciliation<E>, ApiError>) -> Option<SubmitKind> {
        self.submit.in_progress = false;
        let pending = self.submit.pending.take()?;
        let current = self.form.shows(pending.session);
        let reconciliation = match outcome {
            Ok(reconciliation) => reconciliation,
            Err(err) if current => {
                self.submit.error = Some(err.to_string());
                return None;
            }
            Err(err) => {
                log::warn!("{} submit failed after its form closed: {}", E::DESCRIPTOR.key, err);
                return None;
            }
        };

        self.reconcile(reconciliation);
        if current {
            self.close_form();
        }
        Some(pending.kind)
    }

    fn reconcile(&mut self, reconciliation: Reconciliation<E>) {
        match reconciliation {
            Reconciliation::Patched(record) => self.patch(record),
            Reconciliation::Refetched(records) => {
                self.records = records;
                self.list.error = None;
            }
            Reconciliation::RefetchFailed(err) => {
                self.list.error = Some(format!(
                    "Failed to re-fetch {}: {}",
                    E::DESCRIPTOR.title.to_lowercase(),
                    err
                ));
            }
        }
    }

    fn patch(&mut self, record: E) {
        let id = record.id();
        match self.records.iter_mut().find(|r| r.id() == id) {
            Some(slot) => *slot = record,
            None => self.records.push(record),
        }
    }

    // ---- delete ----

    pub fn request_delete(&mut self, id: RecordId) {
        self.remove.error = None;
        self.confirm.arm(id);
    }

    pub fn cancel_delete(&mut self) {
        self.confirm.cancel();
    }

    /// Disarms the dialog and returns the identifier to delete.
    pub fn confirm_delete(&mut self) -> Option<RecordId> {
        let id = self.confirm.take()?;
        self.remove.in_progress = true;
        self.remove.error = None;
        Some(id)
    }

    pub fn finish_delete(&mut self, id: RecordId, outcome: Result<(), ApiError>) {
        self.remove.in_progress = false;
        match outcome {
            Ok(()) => {
                self.records.retain(|r| r.id() != Some(id));
                if matches!(&self.search.outcome, SearchOutcome::Found(r) if r.id() == Some(id)) {
                    self.search.outcome = SearchOutcome::Idle;
                }
            }
            Err(err) => {
                self.remove.error = Some(format!("Failed to delete {}: {}", E::DESCRIPTOR.singular, err));
            }
        }
    }

    // ---- search ----

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search.query = query.into();
    }

    /// Parses the query. Blank input clears the result and sends nothing.
    pub fn begin_search(&mut self) -> Option<RecordId> {
        let query = self.search.query.trim();
        if query.is_empty() {
            self.search.outcome = SearchOutcome::Idle;
            return None;
        }
        match query.parse::<RecordId>() {
            Ok(id) => {
                self.search.in_progress = true;
                Some(id)
            }
            Err(_) => {
                self.search.outcome =
                    SearchOutcome::Failed(format!("Enter a numeric {} ID", E::DESCRIPTOR.singular));
                None
            }
        }
    }

    pub fn finish_search(&mut self, outcome: Result<Option<E>, ApiError>) {
        self.search.in_progress = false;
        self.search.outcome = match outcome {
            Ok(Some(record)) => SearchOutcome::Found(record),
            Ok(None) => SearchOutcome::NotFound,
            Err(err) => SearchOutcome::Failed(err.to_string()),
        };
    }
}
