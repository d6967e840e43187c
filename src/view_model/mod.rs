//! Commit list view-model
//!
//! Owns the record sequence and the table controls (search, sort, page),
//! plus the busy indicators and the error banner text. Every change goes
//! through [`ViewModel::apply`], so the transitions are explicit:
//!
//! ```text
//! Idle ──LoadStarted──▶ Loading ──LoadFinished(Ok)──▶ Loaded
//!                          │
//!                          └────LoadFinished(Err)──▶ Failed
//! ```
//!
//! Network calls happen elsewhere; this module only sees their outcomes,
//! already normalised to strings.

pub mod derive;

use std::collections::{BTreeSet, HashSet};

use crate::model::{
    CommitId, CommitPatch, CommitRecord, SortField, SortSpec, fallback_commits,
};

pub use derive::PageView;

/// Rows per page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Identifies one load request so its completion can be matched up
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

/// Outcome of the most recent load
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// What a failed load does to the record sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Show the fixed placeholder set so the table is never blank
    #[default]
    Demo,
    /// Keep whatever was there before
    Keep,
}

/// Every state transition the view-model knows
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    LoadStarted(RequestId),
    LoadFinished {
        request: RequestId,
        result: Result<Vec<CommitRecord>, String>,
    },
    /// The request was aborted before it completed
    LoadCancelled(RequestId),
    DeleteStarted(CommitId),
    DeleteFinished {
        id: CommitId,
        result: Result<(), String>,
    },
    UpdateStarted(CommitId),
    UpdateFinished {
        id: CommitId,
        /// What was sent; merged when the server echoes nothing back
        patch: CommitPatch,
        result: Result<Option<CommitPatch>, String>,
    },
    /// Refused while another create is in flight
    CreateStarted,
    CreateFinished(Result<CommitRecord, String>),
    /// The form refused to submit; shown in the error banner like any
    /// request failure
    ValidationFailed(String),
    SetSearch(String),
    ToggleSort(SortField),
    SetPage(usize),
    DismissError,
}

#[derive(Debug, Clone)]
pub struct ViewModel {
    records: Vec<CommitRecord>,
    search: String,
    sort: SortSpec,
    page: usize,
    page_size: usize,
    load_state: LoadState,
    pending_loads: BTreeSet<RequestId>,
    error: Option<String>,
    deleting: Option<CommitId>,
    updating: Option<CommitId>,
    creating: bool,
    fallback: FallbackPolicy,
    showing_fallback: bool,
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, FallbackPolicy::default())
    }
}

impl ViewModel {
    /// Empty, not loading. `page_size` of 0 is treated as 1.
    pub fn new(page_size: usize, fallback: FallbackPolicy) -> Self {
        Self {
            records: Vec::new(),
            search: String::new(),
            sort: SortSpec::default(),
            page: 1,
            page_size: page_size.max(1),
            load_state: LoadState::Idle,
            pending_loads: BTreeSet::new(),
            error: None,
            deleting: None,
            updating: None,
            creating: false,
            fallback,
            showing_fallback: false,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn records(&self) -> &[CommitRecord] {
        &self.records
    }

    pub fn record(&self, id: &CommitId) -> Option<&CommitRecord> {
        self.records.iter().find(|r| r.id.as_ref() == Some(id))
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// True while any load is outstanding
    pub fn is_loading(&self) -> bool {
        !self.pending_loads.is_empty()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn deleting(&self) -> Option<&CommitId> {
        self.deleting.as_ref()
    }

    pub fn updating(&self) -> Option<&CommitId> {
        self.updating.as_ref()
    }

    pub fn is_creating(&self) -> bool {
        self.creating
    }

    pub fn fallback_policy(&self) -> FallbackPolicy {
        self.fallback
    }

    /// True when the rows on screen are the demo placeholders
    pub fn showing_fallback(&self) -> bool {
        self.showing_fallback
    }

    /// Whether a create may start (none is in flight)
    pub fn can_create(&self) -> bool {
        !self.creating
    }

    /// Whether a delete for `id` may start (the same id is not already in flight)
    pub fn can_delete(&self, id: &CommitId) -> bool {
        self.deleting.as_ref() != Some(id)
    }

    /// Visible rows for the current controls
    pub fn visible(&self) -> PageView<'_> {
        derive::derive(
            &self.records,
            &self.search,
            self.sort,
            self.page,
            self.page_size,
        )
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Reducer
    // ─────────────────────────────────────────────────────────────────────────

    /// Apply one transition. Returns `false` when the action was refused
    /// (a delete for an id whose delete is already in flight) or did not
    /// belong to any pending request.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::LoadStarted(request) => {
                self.pending_loads.insert(request);
                self.load_state = LoadState::Loading;
                self.error = None;
                true
            }
            Action::LoadFinished { request, result } => self.finish_load(request, result),
            Action::LoadCancelled(request) => {
                if !self.pending_loads.remove(&request) {
                    return false;
                }
                if self.pending_loads.is_empty() && self.load_state == LoadState::Loading {
                    self.load_state = LoadState::Idle;
                }
                true
            }
            Action::DeleteStarted(id) => {
                if !self.can_delete(&id) {
                    return false;
                }
                self.deleting = Some(id);
                self.error = None;
                true
            }
            Action::DeleteFinished { id, result } => {
                if self.deleting.as_ref() == Some(&id) {
                    self.deleting = None;
                }
                match result {
                    Ok(()) => self.remove_record(&id),
                    Err(message) => self.error = Some(message),
                }
                true
            }
            Action::UpdateStarted(id) => {
                self.updating = Some(id);
                self.error = None;
                true
            }
            Action::UpdateFinished { id, patch, result } => {
                if self.updating.as_ref() == Some(&id) {
                    self.updating = None;
                }
                match result {
                    Ok(echoed) => {
                        let merged = echoed.unwrap_or(patch);
                        if let Some(record) = self
                            .records
                            .iter_mut()
                            .find(|r| r.id.as_ref() == Some(&id))
                        {
                            record.apply_patch(&merged);
                        }
                    }
                    Err(message) => self.error = Some(message),
                }
                true
            }
            Action::CreateStarted => {
                if !self.can_create() {
                    return false;
                }
                self.creating = true;
                self.error = None;
                true
            }
            Action::CreateFinished(result) => {
                self.creating = false;
                match result {
                    Ok(record) => self.insert_created(record),
                    Err(message) => self.error = Some(message),
                }
                true
            }
            Action::ValidationFailed(message) => {
                self.error = Some(message);
                true
            }
            Action::SetSearch(term) => {
                if self.search != term {
                    self.search = term;
                    self.page = 1;
                }
                true
            }
            Action::ToggleSort(field) => {
                self.sort = self.sort.toggled(field);
                true
            }
            Action::SetPage(page) => {
                self.page = page;
                true
            }
            Action::DismissError => {
                self.error = None;
                true
            }
        }
    }

    fn finish_load(&mut self, request: RequestId, result: Result<Vec<CommitRecord>, String>) -> bool {
        // Completions of cancelled (or unknown) requests are dropped
        if !self.pending_loads.remove(&request) {
            return false;
        }

        // Whichever completion lands last decides the records
        let outcome = match result {
            Ok(records) => {
                self.records = dedup_by_id(records);
                self.showing_fallback = false;
                self.error = None;
                LoadState::Loaded
            }
            Err(message) => {
                if self.fallback == FallbackPolicy::Demo {
                    self.records = fallback_commits();
                    self.showing_fallback = true;
                }
                self.error = Some(message.clone());
                LoadState::Failed(message)
            }
        };

        self.load_state = if self.pending_loads.is_empty() {
            outcome
        } else {
            LoadState::Loading
        };
        true
    }

    fn remove_record(&mut self, id: &CommitId) {
        self.records.retain(|r| r.id.as_ref() != Some(id));
    }

    fn insert_created(&mut self, record: CommitRecord) {
        if let Some(ref id) = record.id {
            self.remove_record(id);
        }
        self.records.insert(0, record);
    }
}

/// Keep the first record for every id; records without an id are kept as is
fn dedup_by_id(records: Vec<CommitRecord>) -> Vec<CommitRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|r| match r.id {
            Some(ref id) => seen.insert(id.clone()),
            None => true,
        })
        .collect()
}
