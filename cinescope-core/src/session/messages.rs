//! Session messages and effects

use cinescope_model::MovieId;

use super::state::{DetailTicket, FetchTicket};
use crate::providers::{DetailOutcome, SearchOutcome};

/// Inputs consumed by the session: user actions and request completions.
#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    // User actions
    /// Search form submitted with the raw input text
    SearchSubmitted(String),
    /// "Load more" affordance activated
    LoadMoreClicked,
    /// Viewport scrolled; distance in pixels from the bottom of the content
    Scrolled { distance_from_bottom: f32 },
    /// A result card was activated
    ResultActivated(MovieId),
    /// Back from the detail view
    ReturnToResults,
    /// Title/home activated: start over
    RestartRequested,

    // Internal events
    /// A page request finished
    PageLoaded {
        ticket: FetchTicket,
        outcome: SearchOutcome,
    },
    /// A detail lookup finished
    DetailLoaded {
        ticket: DetailTicket,
        outcome: DetailOutcome,
    },
}

impl Message {
    /// Convert to string for debugging
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SearchSubmitted(_) => "SearchSubmitted",
            Self::LoadMoreClicked => "LoadMoreClicked",
            Self::Scrolled { .. } => "Scrolled",
            Self::ResultActivated(_) => "ResultActivated",
            Self::ReturnToResults => "ReturnToResults",
            Self::RestartRequested => "RestartRequested",
            Self::PageLoaded { .. } => "PageLoaded",
            Self::DetailLoaded { .. } => "DetailLoaded",
        }
    }
}

/// Work the orchestrator hands to the runtime. Each effect produces exactly
/// one completion message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Fetch one page of search results.
    Search(FetchTicket),
    /// Fetch the full record of one movie.
    FetchDetail(DetailTicket),
}
