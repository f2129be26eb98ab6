use std::fmt;

use crate::MovieSummary;

/// Marker rendered in place of any detail field the service did not supply.
pub const NOT_AVAILABLE: &str = "N/A";

/// Optional detail field that renders as [`NOT_AVAILABLE`] instead of being
/// omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Attribute(Option<String>);

impl Attribute {
    /// Build from a raw service value. Blank strings and the service's own
    /// `"N/A"` are both treated as missing.
    pub fn from_service(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(value) if !value.is_empty() && value != NOT_AVAILABLE => {
                Attribute(Some(value.to_string()))
            }
            _ => Attribute(None),
        }
    }

    pub fn missing() -> Self {
        Attribute(None)
    }

    pub fn value(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_available(&self) -> bool {
        self.0.is_some()
    }

    /// The value, or `fallback` when missing.
    pub fn or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.0.as_deref().unwrap_or(fallback)
    }
}

impl From<&str> for Attribute {
    fn from(value: &str) -> Self {
        Attribute::from_service(Some(value))
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.or(NOT_AVAILABLE))
    }
}

/// Full record shown in the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovieDetail {
    pub summary: MovieSummary,
    pub director: Attribute,
    pub actors: Attribute,
    pub plot: Attribute,
    pub genre: Attribute,
    pub rating: Attribute,
}

impl MovieDetail {
    pub fn id(&self) -> &crate::MovieId {
        &self.summary.id
    }

    pub fn title(&self) -> &str {
        &self.summary.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_render_marker() {
        assert_eq!(Attribute::missing().to_string(), NOT_AVAILABLE);
        assert_eq!(Attribute::from_service(Some("N/A")).to_string(), "N/A");
        assert!(!Attribute::from_service(Some("")).is_available());
    }

    #[test]
    fn present_fields_render_verbatim() {
        let director = Attribute::from("Christopher Nolan");
        assert!(director.is_available());
        assert_eq!(director.to_string(), "Christopher Nolan");
        assert_eq!(director.or("fallback"), "Christopher Nolan");
    }

    #[test]
    fn fallback_is_only_used_when_missing() {
        let plot = Attribute::missing();
        assert_eq!(plot.or("Plot not available."), "Plot not available.");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn attribute_serializes_as_plain_option() {
        let json = serde_json::to_string(&Attribute::from("Drama")).unwrap();
        assert_eq!(json, "\"Drama\"");
        let json = serde_json::to_string(&Attribute::missing()).unwrap();
        assert_eq!(json, "null");
    }
}
