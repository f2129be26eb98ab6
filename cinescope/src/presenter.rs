//! Plain-text presenter that writes the session to a terminal.

use std::fmt;
use std::io::Write;

use cinescope_core::{
    Banner, DetailRenderer, ResultRenderer, Severity, Surface, View,
};
use cinescope_model::{MovieDetail, MovieId, MovieSummary};

const PLOT_FALLBACK: &str = "Plot not available.";

/// Writes results, details, and notices line by line to `W`.
///
/// Keeps the ids it has listed so `open <n>` can refer to a result by its
/// position.
#[derive(Debug)]
pub struct TerminalPresenter<W> {
    out: W,
    listed: Vec<MovieId>,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            listed: Vec::new(),
        }
    }

    /// Map a 1-based list position to its id; anything else is taken as an
    /// id verbatim.
    pub fn resolve(&self, token: &str) -> MovieId {
        token
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| self.listed.get(index).cloned())
            .unwrap_or_else(|| MovieId::new(token))
    }

    pub fn notice(&mut self, text: impl fmt::Display) {
        self.emit(format_args!("{text}"));
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, line: fmt::Arguments<'_>) {
        if let Err(err) = writeln!(self.out, "{line}").and_then(|()| self.out.flush()) {
            tracing::warn!(error = %err, "failed to write to terminal");
        }
    }
}

impl<W: Write> ResultRenderer for TerminalPresenter<W> {
    fn clear_summaries(&mut self) {
        self.listed.clear();
    }

    fn render_summaries(&mut self, batch: &[MovieSummary]) {
        for movie in batch {
            self.listed.push(movie.id.clone());
            let position = self.listed.len();
            self.emit(format_args!(
                "{position:>4}. {} ({}) [{}]",
                movie.title, movie.year, movie.id
            ));
        }
    }
}

impl<W: Write> DetailRenderer for TerminalPresenter<W> {
    fn render_detail(&mut self, detail: &MovieDetail) {
        self.emit(format_args!("{} ({})", detail.title(), detail.summary.year));
        self.emit(format_args!("  Director: {}", detail.director));
        self.emit(format_args!("  Cast:     {}", detail.actors));
        self.emit(format_args!("  Genre:    {}", detail.genre));
        self.emit(format_args!("  Rating:   {}", detail.rating));
        self.emit(format_args!("  Poster:   {}", detail.summary.poster_url));
        self.emit(format_args!("  {}", detail.plot.or(PLOT_FALLBACK)));
    }
}

impl<W: Write> Surface for TerminalPresenter<W> {
    fn view_changed(&mut self, view: View) {
        self.emit(format_args!("== {view} =="));
    }

    fn banner_changed(&mut self, banner: Option<&Banner>) {
        if let Some(banner) = banner {
            let tag = match banner.severity {
                Severity::Info => "info",
                Severity::Error => "error",
            };
            self.emit(format_args!("[{tag}] {}", banner.text));
        }
    }

    fn load_more_visibility_changed(&mut self, visible: bool) {
        if visible {
            self.emit(format_args!("-- type 'more' for more results --"));
        }
    }

    fn heading_changed(&mut self, heading: Option<&str>) {
        if let Some(heading) = heading {
            self.emit(format_args!("{heading}"));
        }
    }

    // Output is append-only; nothing to rewind.
    fn scroll_to_top(&mut self) {}
}
