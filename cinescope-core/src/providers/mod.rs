pub mod omdb;
pub mod traits;

pub use omdb::OmdbClient;
pub use traits::{
    DetailOutcome, FailureKind, MetadataClient, ProviderError, SearchOutcome,
    SearchPage,
};

#[cfg(test)]
pub use traits::MockMetadataClient;
