//! Scroll-triggered continuation.

use crate::session::{LoadingMode, SessionState};
use crate::view::View;

/// Distance from the bottom of the content, in pixels, at or under which the
/// next page is requested.
pub const NEAR_BOTTOM_THRESHOLD: f32 = 500.0;

/// Decides whether a scroll event should fetch the next page.
///
/// There is no debouncing here: repeated events while a page is loading are
/// dropped by the in-flight check.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollContinuation;

impl ScrollContinuation {
    pub fn should_continue(
        &self,
        distance_from_bottom: f32,
        session: &SessionState,
        view: View,
    ) -> bool {
        session.mode() == LoadingMode::Continuous
            && !session.is_in_flight()
            && view == View::Results
            && distance_from_bottom <= NEAR_BOTTOM_THRESHOLD
    }
}
