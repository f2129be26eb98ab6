//! Single-flight fetch orchestration over the search session.
//!
//! The orchestrator is the only writer of [`SessionState`]. It follows an
//! update/effect loop: [`FetchOrchestrator::update`] consumes one
//! [`Message`], mutates state, drives the presenter, and optionally returns
//! an [`Effect`] for the runtime to perform. The effect's completion comes
//! back as another message.

use cinescope_model::{MovieId, MovieSummary};

use super::messages::{Effect, Message};
use super::state::{DetailTicket, FetchTicket, LoadingMode, SessionState};
use crate::providers::{DetailOutcome, FailureKind, SearchOutcome, SearchPage};
use crate::render::Presenter;
use crate::scroll::ScrollContinuation;
use crate::view::{Banner, View, ViewController};

pub const SEARCHING: &str = "Searching for movies, please wait...";
pub const LOADING_MORE: &str = "Loading more results...";
pub const LOADING_DETAILS: &str = "Loading details...";
pub const NO_MORE_RESULTS: &str = "No more results to show.";
pub const EMPTY_TERM: &str = "Please enter a search term.";
pub const DETAIL_UNAVAILABLE: &str = "Could not load the movie details.";

pub fn no_results_for(term: &str) -> String {
    format!("No results found for \"{term}\".")
}

pub fn heading_for(term: &str) -> String {
    format!("Results for \"{term}\"")
}

/// Owns the session, the view controller, and the presenter.
#[derive(Debug)]
pub struct FetchOrchestrator<P> {
    session: SessionState,
    view: ViewController,
    scroll: ScrollContinuation,
    presenter: P,
}

impl<P: Presenter> FetchOrchestrator<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            session: SessionState::new(),
            view: ViewController::new(),
            scroll: ScrollContinuation,
            presenter,
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn view(&self) -> &ViewController {
        &self.view
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    pub fn update(&mut self, message: Message) -> Option<Effect> {
        tracing::trace!(message = message.as_str(), "session update");

        match message {
            Message::SearchSubmitted(raw) => self.submit_search(&raw),
            Message::LoadMoreClicked => self.load_more(),
            Message::Scrolled {
                distance_from_bottom,
            } => self.on_scrolled(distance_from_bottom),
            Message::ResultActivated(id) => self.open_detail(id),
            Message::ReturnToResults => {
                self.transition(View::Results);
                None
            }
            Message::RestartRequested => {
                self.restart();
                None
            }
            Message::PageLoaded { ticket, outcome } => {
                self.apply_page(ticket, outcome);
                None
            }
            Message::DetailLoaded { ticket, outcome } => {
                self.apply_detail(ticket, outcome);
                None
            }
        }
    }

    /// Request `page` of `term`. Each guard is a silent no-op: an empty
    /// term, an outstanding request, or an exhausted result set. A first
    /// page always starts a fresh result set, so exhaustion never blocks it.
    pub fn request_page(&mut self, term: &str, page: u32) -> Option<Effect> {
        if term.is_empty() {
            tracing::debug!(page, "ignoring page request without a term");
            return None;
        }

        if self.session.is_in_flight() {
            tracing::debug!(term, page, "request outstanding, dropping page request");
            return None;
        }

        if page > 1 && self.session.is_exhausted() {
            tracing::debug!(
                term,
                seen = self.session.seen_count(),
                total = self.session.total_results(),
                "all results loaded"
            );
            self.session.set_mode(LoadingMode::Manual);
            self.view.set_load_more_visible(false, &mut self.presenter);
            return None;
        }

        self.session.mark_in_flight();
        let notice = if page == 1 { SEARCHING } else { LOADING_MORE };
        self.view
            .show_message(Banner::info(notice), &mut self.presenter);

        tracing::info!(term, page, "requesting search page");
        Some(Effect::Search(FetchTicket {
            generation: self.session.generation(),
            term: term.to_string(),
            page,
        }))
    }

    /// Look up the full record for `id`. Shares the single-flight guard
    /// with page requests.
    pub fn open_detail(&mut self, id: MovieId) -> Option<Effect> {
        if id.is_empty() {
            return None;
        }

        if self.session.is_in_flight() {
            tracing::debug!(%id, "request outstanding, dropping detail lookup");
            return None;
        }

        self.session.mark_in_flight();
        self.view
            .show_message(Banner::info(LOADING_DETAILS), &mut self.presenter);

        tracing::info!(%id, "requesting movie details");
        Some(Effect::FetchDetail(DetailTicket {
            generation: self.session.generation(),
            id,
        }))
    }

    fn submit_search(&mut self, raw: &str) -> Option<Effect> {
        let term = raw.trim();
        if term.is_empty() {
            self.view
                .show_message(Banner::info(EMPTY_TERM), &mut self.presenter);
            return None;
        }

        if self.session.is_in_flight() {
            tracing::debug!(term, "request outstanding, dropping search");
            return None;
        }

        // The current session stays intact until the new term's first page
        // lands; a failed attempt must leave it as it was.
        self.view.set_load_more_visible(false, &mut self.presenter);
        self.request_page(term, 1)
    }

    fn load_more(&mut self) -> Option<Effect> {
        if self.session.is_in_flight() || !self.session.has_active_term() {
            tracing::debug!("load more ignored");
            return None;
        }

        if self.session.mode() == LoadingMode::Manual {
            self.session.set_mode(LoadingMode::Continuous);
        }
        self.view.set_load_more_visible(false, &mut self.presenter);

        let term = self.session.term().to_string();
        let page = self.session.page();
        self.request_page(&term, page)
    }

    fn on_scrolled(&mut self, distance_from_bottom: f32) -> Option<Effect> {
        if !self.scroll.should_continue(
            distance_from_bottom,
            &self.session,
            self.view.current(),
        ) {
            return None;
        }

        let term = self.session.term().to_string();
        let page = self.session.page();
        self.request_page(&term, page)
    }

    fn apply_page(&mut self, ticket: FetchTicket, outcome: SearchOutcome) {
        if ticket.generation != self.session.generation() {
            tracing::warn!(
                term = %ticket.term,
                page = ticket.page,
                "discarding page for a superseded session"
            );
            return;
        }

        self.session.clear_in_flight();

        match outcome {
            SearchOutcome::Page(page) => self.apply_results(&ticket, page),
            SearchOutcome::Empty => self.apply_empty(&ticket),
            SearchOutcome::Failed(kind) => self.apply_failure(&ticket, kind),
        }
    }

    fn apply_results(&mut self, ticket: &FetchTicket, page: SearchPage) {
        if ticket.page == 1 {
            self.session.begin(&ticket.term);
            self.presenter.clear_summaries();
            self.view.set_heading(
                Some(heading_for(&ticket.term)),
                &mut self.presenter,
            );
            self.transition(View::Results);
        }

        let seen = self.session.seen_count();
        let reported = page.total_results;
        if (reported as usize) < seen {
            tracing::warn!(
                reported,
                seen,
                "service total shrank below loaded results"
            );
            self.session.set_total_results(seen as u32);
        } else {
            self.session.set_total_results(reported);
        }

        let session = &mut self.session;
        let batch: Vec<MovieSummary> = page
            .items
            .into_iter()
            .filter(|item| !item.id.is_empty() && session.accept(&item.id))
            .collect();

        if !batch.is_empty() {
            self.presenter.render_summaries(&batch);
        }

        self.session.advance_past(ticket.page);
        if self.session.is_exhausted() {
            self.session.set_mode(LoadingMode::Manual);
        }
        self.refresh_load_more();
        self.view.clear_message(&mut self.presenter);

        tracing::info!(
            term = %ticket.term,
            page = ticket.page,
            added = batch.len(),
            seen = self.session.seen_count(),
            total = self.session.total_results(),
            "page applied"
        );
    }

    fn apply_empty(&mut self, ticket: &FetchTicket) {
        if ticket.page == 1 {
            self.session.reset();
            self.presenter.clear_summaries();
            self.view.set_heading(
                Some(heading_for(&ticket.term)),
                &mut self.presenter,
            );
            self.transition(View::Results);
            self.view.show_message(
                Banner::info(no_results_for(&ticket.term)),
                &mut self.presenter,
            );
        } else {
            self.view
                .show_message(Banner::info(NO_MORE_RESULTS), &mut self.presenter);
        }

        self.session.set_mode(LoadingMode::Manual);
        self.view.set_load_more_visible(false, &mut self.presenter);
        tracing::info!(term = %ticket.term, page = ticket.page, "no results");
    }

    fn apply_failure(&mut self, ticket: &FetchTicket, kind: FailureKind) {
        tracing::warn!(
            term = %ticket.term,
            page = ticket.page,
            ?kind,
            "page request failed"
        );

        self.session.set_mode(LoadingMode::Manual);
        self.refresh_load_more();
        self.view.show_message(
            Banner::error(kind.user_message()),
            &mut self.presenter,
        );
    }

    fn apply_detail(&mut self, ticket: DetailTicket, outcome: DetailOutcome) {
        if ticket.generation != self.session.generation() {
            tracing::warn!(id = %ticket.id, "discarding details for a superseded session");
            return;
        }

        self.session.clear_in_flight();

        match outcome {
            DetailOutcome::Found(detail) => {
                self.presenter.render_detail(&detail);
                self.transition(View::Detail);
            }
            DetailOutcome::NotFound => {
                tracing::warn!(id = %ticket.id, "details not found");
                self.transition(View::Results);
                self.view.show_message(
                    Banner::error(DETAIL_UNAVAILABLE),
                    &mut self.presenter,
                );
            }
            DetailOutcome::Failed(kind) => {
                tracing::warn!(id = %ticket.id, ?kind, "detail lookup failed");
                self.transition(View::Results);
                self.view.show_message(
                    Banner::error(kind.user_message()),
                    &mut self.presenter,
                );
            }
        }
    }

    fn restart(&mut self) {
        tracing::info!("restarting session");
        self.session.reset();
        self.presenter.clear_summaries();
        self.view.set_heading(None, &mut self.presenter);
        self.transition(View::Landing);
    }

    fn transition(&mut self, view: View) {
        if self.view.show(view, &mut self.presenter) {
            self.session.set_mode(LoadingMode::Manual);
        }

        if view == View::Results {
            self.refresh_load_more();
        } else {
            self.view.set_load_more_visible(false, &mut self.presenter);
        }
    }

    /// "Load more" is offered only in manual mode while results remain.
    fn refresh_load_more(&mut self) {
        let visible = self.session.has_active_term()
            && self.session.mode() == LoadingMode::Manual
            && self.session.has_more();
        self.view.set_load_more_visible(visible, &mut self.presenter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingPresenter;
    use cinescope_model::{DEFAULT_POSTER_PLACEHOLDER, PosterUrl};

    fn summary(id: &str) -> MovieSummary {
        MovieSummary::new(
            id,
            format!("Movie {id}"),
            "2005",
            PosterUrl::resolve(None, DEFAULT_POSTER_PLACEHOLDER),
        )
    }

    fn ticket_of(effect: Option<Effect>) -> FetchTicket {
        match effect {
            Some(Effect::Search(ticket)) => ticket,
            other => panic!("expected a search effect, got {other:?}"),
        }
    }

    #[test]
    fn empty_term_shows_prompt_and_issues_nothing() {
        let mut orchestrator = FetchOrchestrator::new(RecordingPresenter::default());
        let effect = orchestrator.update(Message::SearchSubmitted("   ".into()));
        assert!(effect.is_none());
        assert_eq!(
            orchestrator.view().banner().map(|b| b.text.as_str()),
            Some(EMPTY_TERM)
        );
        assert!(!orchestrator.session().is_in_flight());
    }

    #[test]
    fn submitted_term_is_trimmed() {
        let mut orchestrator = FetchOrchestrator::new(RecordingPresenter::default());
        let ticket =
            ticket_of(orchestrator.update(Message::SearchSubmitted("  alien ".into())));
        assert_eq!(ticket.term, "alien");
        assert_eq!(ticket.page, 1);
        assert_eq!(
            orchestrator.view().banner().map(|b| b.text.as_str()),
            Some(SEARCHING)
        );
    }

    #[test]
    fn request_page_without_term_is_a_noop() {
        let mut orchestrator = FetchOrchestrator::new(RecordingPresenter::default());
        assert!(orchestrator.request_page("", 1).is_none());
        assert!(!orchestrator.session().is_in_flight());
    }

    #[test]
    fn shrinking_total_never_drops_below_loaded_count() {
        let mut orchestrator = FetchOrchestrator::new(RecordingPresenter::default());
        let ticket =
            ticket_of(orchestrator.update(Message::SearchSubmitted("alien".into())));
        orchestrator.update(Message::PageLoaded {
            ticket,
            outcome: SearchOutcome::Page(SearchPage {
                total_results: 30,
                items: (1..=10).map(|n| summary(&format!("tt{n}"))).collect(),
            }),
        });

        let ticket = ticket_of(orchestrator.update(Message::LoadMoreClicked));
        orchestrator.update(Message::PageLoaded {
            ticket,
            outcome: SearchOutcome::Page(SearchPage {
                total_results: 4,
                items: vec![summary("tt11")],
            }),
        });

        let session = orchestrator.session();
        assert_eq!(session.total_results(), 10);
        assert_eq!(session.seen_count(), 10);
        assert!(session.is_exhausted());
        assert_eq!(session.mode(), LoadingMode::Manual);
    }

    #[test]
    fn blank_ids_are_never_rendered() {
        let mut orchestrator = FetchOrchestrator::new(RecordingPresenter::default());
        let ticket =
            ticket_of(orchestrator.update(Message::SearchSubmitted("alien".into())));
        orchestrator.update(Message::PageLoaded {
            ticket,
            outcome: SearchOutcome::Page(SearchPage {
                total_results: 3,
                items: vec![summary("tt1"), summary(" "), summary("tt2")],
            }),
        });
        assert_eq!(orchestrator.presenter().rendered_ids(), vec!["tt1", "tt2"]);
    }
}
