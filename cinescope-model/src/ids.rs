use std::fmt;

/// Stable external identifier of a movie (an IMDb id such as `tt0372784`).
///
/// Unique within the result set of a single search term, which is what the
/// session relies on for de-duplication across pages.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MovieId(String);

impl MovieId {
    pub fn new(id: impl Into<String>) -> Self {
        MovieId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl AsRef<str> for MovieId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MovieId {
    fn from(value: &str) -> Self {
        MovieId(value.to_string())
    }
}

impl From<String> for MovieId {
    fn from(value: String) -> Self {
        MovieId(value)
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
