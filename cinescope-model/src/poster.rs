use std::fmt;

/// Placeholder artwork used whenever the metadata service has no poster.
pub const DEFAULT_POSTER_PLACEHOLDER: &str =
    "https://placehold.co/300x445?text=No+Poster";

/// Marker the metadata service uses in place of a missing image.
const SERVICE_NO_IMAGE: &str = "N/A";

/// A poster URL that is always renderable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PosterUrl(String);

impl PosterUrl {
    /// Resolve a poster reported by the service, falling back to
    /// `placeholder` when the service reports "no image" or nothing at all.
    pub fn resolve(raw: Option<&str>, placeholder: &str) -> Self {
        match raw.map(str::trim) {
            Some(url) if !url.is_empty() && url != SERVICE_NO_IMAGE => {
                PosterUrl(url.to_string())
            }
            _ => PosterUrl(placeholder.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_placeholder(&self, placeholder: &str) -> bool {
        self.0 == placeholder
    }
}

impl fmt::Display for PosterUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
