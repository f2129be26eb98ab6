use crate::{MovieId, PosterUrl};

/// Lightweight search hit, one card in the result list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovieSummary {
    pub id: MovieId,
    pub title: String,
    /// Release year as reported by the service. Series report ranges such
    /// as `2005–2012`, so this stays textual.
    pub year: String,
    pub poster_url: PosterUrl,
}

impl MovieSummary {
    pub fn new(
        id: impl Into<MovieId>,
        title: impl Into<String>,
        year: impl Into<String>,
        poster_url: PosterUrl,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year: year.into(),
            poster_url,
        }
    }
}
