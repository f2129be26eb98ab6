//! Which view is visible, the message banner, and the load-more affordance.

use std::fmt;

use crate::render::Surface;

/// The three mutually exclusive screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Start screen before any search.
    #[default]
    Landing,
    /// The accumulated result cards.
    Results,
    /// One movie's full record.
    Detail,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Landing => write!(f, "Landing"),
            View::Results => write!(f, "Results"),
            View::Detail => write!(f, "Detail"),
        }
    }
}

/// Presentation class of a [`Banner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Progress or neutral notice.
    Info,
    /// A request failed.
    Error,
}

/// Message shown over the active view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub text: String,
    pub severity: Severity,
}

impl Banner {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Info,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Owns view visibility and forwards every change to a [`Surface`].
#[derive(Debug, Clone, Default)]
pub struct ViewController {
    view: View,
    banner: Option<Banner>,
    load_more_visible: bool,
    heading: Option<String>,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> View {
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

    /// Hide every other view, reveal `view`, clear the banner, and scroll to
    /// the top.
    ///
    /// Returns `true` when the caller must drop the session back to manual
    /// loading, which is whenever `view` is not the results list.
    pub fn show<S: Surface + ?Sized>(
        &mut self,
        view: View,
        surface: &mut S,
    ) -> bool {
        if self.view != view {
            tracing::debug!(from = %self.view, to = %view, "view transition");
        }
        self.view = view;
        surface.view_changed(view);
        self.clear_message(surface);
        surface.scroll_to_top();
        view != View::Results
    }

    pub fn show_message<S: Surface + ?Sized>(
        &mut self,
        banner: Banner,
        surface: &mut S,
    ) {
        surface.banner_changed(Some(&banner));
        self.banner = Some(banner);
    }

    pub fn clear_message<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        if self.banner.take().is_some() {
            surface.banner_changed(None);
        }
    }

    pub fn set_load_more_visible<S: Surface + ?Sized>(
        &mut self,
        visible: bool,
        surface: &mut S,
    ) {
        if self.load_more_visible != visible {
            self.load_more_visible = visible;
            surface.load_more_visibility_changed(visible);
        }
    }

    pub fn set_heading<S: Surface + ?Sized>(
        &mut self,
        heading: Option<String>,
        surface: &mut S,
    ) {
        surface.heading_changed(heading.as_deref());
        self.heading = heading;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{PresenterCall, RecordingPresenter};

    #[test]
    fn show_clears_banner_and_scrolls_to_top() {
        let mut surface = RecordingPresenter::default();
        let mut view = ViewController::new();
        view.show_message(Banner::error("boom"), &mut surface);

        let disarm = view.show(View::Results, &mut surface);

        assert!(!disarm);
        assert_eq!(view.current(), View::Results);
        assert!(view.banner().is_none());
        assert_eq!(surface.scroll_resets(), 1);
        assert_eq!(surface.banner(), None);
    }

    #[test]
    fn leaving_results_asks_for_manual_mode() {
        let mut surface = RecordingPresenter::default();
        let mut view = ViewController::new();
        assert!(view.show(View::Detail, &mut surface));
        assert!(view.show(View::Landing, &mut surface));
        assert!(!view.show(View::Results, &mut surface));
    }

    #[test]
    fn message_survives_until_next_transition() {
        let mut surface = RecordingPresenter::default();
        let mut view = ViewController::new();
        view.show(View::Results, &mut surface);
        view.show_message(Banner::info("Loading more results..."), &mut surface);
        assert_eq!(view.current(), View::Results);
        assert_eq!(
            view.banner().map(|b| b.text.as_str()),
            Some("Loading more results...")
        );
    }

    #[test]
    fn affordance_changes_are_only_forwarded_once() {
        let mut surface = RecordingPresenter::default();
        let mut view = ViewController::new();
        view.set_load_more_visible(true, &mut surface);
        view.set_load_more_visible(true, &mut surface);
        let toggles = surface
            .calls()
            .iter()
            .filter(|call| matches!(call, PresenterCall::LoadMoreVisible(_)))
            .count();
        assert_eq!(toggles, 1);
    }
}
