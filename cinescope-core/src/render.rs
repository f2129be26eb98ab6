//! Output seams between the session core and whatever draws it.
//!
//! The core only guarantees that what it hands over is de-duplicated and
//! well formed; markup, layout, and styling live behind these traits.

use cinescope_model::{MovieDetail, MovieId, MovieSummary};

use crate::view::{Banner, View};

/// Draws result cards.
pub trait ResultRenderer {
    fn clear_summaries(&mut self);
    /// Append a batch of cards. Every id in `batch` is new to the session.
    fn render_summaries(&mut self, batch: &[MovieSummary]);
}

/// Draws the full record of one movie.
pub trait DetailRenderer {
    fn render_detail(&mut self, detail: &MovieDetail);
}

/// View-level outputs driven by the view controller.
pub trait Surface {
    fn view_changed(&mut self, view: View);
    fn banner_changed(&mut self, banner: Option<&Banner>);
    fn load_more_visibility_changed(&mut self, visible: bool);
    fn heading_changed(&mut self, heading: Option<&str>);
    fn scroll_to_top(&mut self);
}

/// Everything the orchestrator needs to drive a front-end.
pub trait Presenter: ResultRenderer + DetailRenderer + Surface {}

impl<T> Presenter for T where T: ResultRenderer + DetailRenderer + Surface {}

/// One recorded presenter call.
#[derive(Debug, Clone, PartialEq)]
pub enum PresenterCall {
    ClearSummaries,
    RenderSummaries(Vec<MovieId>),
    RenderDetail(MovieId),
    View(View),
    Banner(Option<Banner>),
    LoadMoreVisible(bool),
    Heading(Option<String>),
    ScrollToTop,
}

/// Presenter that keeps the rendered state in memory and logs each call.
///
/// Meant for tests: the call log is never trimmed, so drain it with
/// [`RecordingPresenter::clear_calls`] in long scripted runs.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    calls: Vec<PresenterCall>,
    summaries: Vec<MovieSummary>,
    detail: Option<MovieDetail>,
    view: View,
    banner: Option<Banner>,
    load_more_visible: bool,
    heading: Option<String>,
    scroll_resets: usize,
}

impl RecordingPresenter {
    pub fn calls(&self) -> &[PresenterCall] {
        &self.calls
    }

    /// Cards currently on screen, in render order.
    pub fn summaries(&self) -> &[MovieSummary] {
        &self.summaries
    }

    pub fn rendered_ids(&self) -> Vec<&str> {
        self.summaries.iter().map(|s| s.id.as_str()).collect()
    }

    pub fn detail(&self) -> Option<&MovieDetail> {
        self.detail.as_ref()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn load_more_visible(&self) -> bool {
        self.load_more_visible
    }

    pub fn heading(&self) -> Option<&str> {
        self.heading.as_deref()
    }

    pub fn scroll_resets(&self) -> usize {
        self.scroll_resets
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl ResultRenderer for RecordingPresenter {
    fn clear_summaries(&mut self) {
        self.summaries.clear();
        self.calls.push(PresenterCall::ClearSummaries);
    }

    fn render_summaries(&mut self, batch: &[MovieSummary]) {
        self.summaries.extend_from_slice(batch);
        self.calls.push(PresenterCall::RenderSummaries(
            batch.iter().map(|s| s.id.clone()).collect(),
        ));
    }
}

impl DetailRenderer for RecordingPresenter {
    fn render_detail(&mut self, detail: &MovieDetail) {
        self.detail = Some(detail.clone());
        self.calls
            .push(PresenterCall::RenderDetail(detail.id().clone()));
    }
}

impl Surface for RecordingPresenter {
    fn view_changed(&mut self, view: View) {
        self.view = view;
        self.calls.push(PresenterCall::View(view));
    }

    fn banner_changed(&mut self, banner: Option<&Banner>) {
        self.banner = banner.cloned();
        self.calls.push(PresenterCall::Banner(banner.cloned()));
    }

    fn load_more_visibility_changed(&mut self, visible: bool) {
        self.load_more_visible = visible;
        self.calls.push(PresenterCall::LoadMoreVisible(visible));
    }

    fn heading_changed(&mut self, heading: Option<&str>) {
        self.heading = heading.map(str::to_string);
        self.calls
            .push(PresenterCall::Heading(heading.map(str::to_string)));
    }

    fn scroll_to_top(&mut self) {
        self.scroll_resets += 1;
        self.calls.push(PresenterCall::ScrollToTop);
    }
}
