//! Search session state and its mutation rules.

use std::collections::HashSet;

use cinescope_model::MovieId;

/// How further pages are requested once results are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingMode {
    /// Only an explicit "load more" fetches the next page.
    #[default]
    Manual,
    /// Scrolling near the bottom of the results fetches the next page.
    Continuous,
}

/// Identifies one outstanding page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    /// Session generation the request was issued under.
    pub generation: u64,
    /// Term the page belongs to.
    pub term: String,
    /// 1-based page number.
    pub page: u32,
}

/// Identifies one outstanding detail lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailTicket {
    /// Session generation the lookup was issued under.
    pub generation: u64,
    pub id: MovieId,
}

/// The single search session. Readable by anyone, writable only from
/// within this crate's orchestrator.
#[derive(Debug, Clone)]
pub struct SessionState {
    term: String,
    page: u32,
    total_results: u32,
    seen_ids: HashSet<MovieId>,
    mode: LoadingMode,
    in_flight: bool,
    generation: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            term: String::new(),
            page: 1,
            total_results: 0,
            seen_ids: HashSet::new(),
            mode: LoadingMode::Manual,
            in_flight: false,
            generation: 0,
        }
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last committed search term; empty means no active session.
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn has_active_term(&self) -> bool {
        !self.term.is_empty()
    }

    /// Next page index to request.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Total reported by the last successful page; 0 means unknown.
    pub fn total_results(&self) -> u32 {
        self.total_results
    }

    pub fn seen_count(&self) -> usize {
        self.seen_ids.len()
    }

    pub fn has_seen(&self, id: &MovieId) -> bool {
        self.seen_ids.contains(id)
    }

    pub fn mode(&self) -> LoadingMode {
        self.mode
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Every result the service reported for the term has been surfaced.
    pub fn is_exhausted(&self) -> bool {
        self.total_results > 0 && self.seen_count() >= self.total_results as usize
    }

    /// More results exist beyond what has been surfaced.
    pub fn has_more(&self) -> bool {
        self.seen_count() < self.total_results as usize
    }

    /// Back to the initial values. Also invalidates any outstanding request
    /// by moving to a new generation.
    pub(crate) fn reset(&mut self) {
        self.term.clear();
        self.page = 1;
        self.total_results = 0;
        self.seen_ids.clear();
        self.mode = LoadingMode::Manual;
        self.in_flight = false;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Adopt `term` as the active session after its first page landed.
    pub(crate) fn begin(&mut self, term: &str) {
        self.term.clear();
        self.term.push_str(term);
        self.page = 1;
        self.seen_ids.clear();
        self.total_results = 0;
        self.mode = LoadingMode::Manual;
    }

    pub(crate) fn set_mode(&mut self, mode: LoadingMode) {
        self.mode = mode;
    }

    pub(crate) fn mark_in_flight(&mut self) {
        self.in_flight = true;
    }

    pub(crate) fn clear_in_flight(&mut self) {
        self.in_flight = false;
    }

    /// Record `id` as surfaced. Returns `false` when it was already seen or
    /// when accepting it would exceed the reported total.
    pub(crate) fn accept(&mut self, id: &MovieId) -> bool {
        if self.seen_ids.contains(id) {
            return false;
        }
        if self.total_results > 0
            && self.seen_ids.len() >= self.total_results as usize
        {
            return false;
        }
        self.seen_ids.insert(id.clone())
    }

    pub(crate) fn set_total_results(&mut self, total: u32) {
        self.total_results = total;
    }

    pub(crate) fn advance_past(&mut self, page: u32) {
        self.page = page.saturating_add(1);
    }
}
