//! Core data model definitions shared across cinescope crates.
#![allow(missing_docs)]

pub mod details;
pub mod ids;
pub mod poster;
pub mod summary;

// Intentionally curated re-exports for downstream consumers.
pub use details::{Attribute, MovieDetail, NOT_AVAILABLE};
pub use ids::MovieId;
pub use poster::{DEFAULT_POSTER_PLACEHOLDER, PosterUrl};
pub use summary::MovieSummary;
