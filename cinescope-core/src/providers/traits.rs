use async_trait::async_trait;
use cinescope_model::{MovieDetail, MovieId, MovieSummary};
use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("No results")]
    NoResults,

    #[error("Not found")]
    NotFound,

    #[error("Invalid API key (HTTP {status})")]
    InvalidApiKey { status: StatusCode },

    #[error("Metadata service returned status: {0}")]
    Status(StatusCode),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl ProviderError {
    /// Classify a failure for the user-facing message. `None` for the two
    /// variants that are normal terminal outcomes rather than failures.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            ProviderError::NoResults | ProviderError::NotFound => None,
            ProviderError::InvalidApiKey { .. } => Some(FailureKind::Auth),
            ProviderError::Status(_)
            | ProviderError::Network(_)
            | ProviderError::Parse(_) => Some(FailureKind::Network),
        }
    }
}

/// Typed failure carried from the client boundary to the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The service rejected the API credential (HTTP 401/403).
    Auth,
    /// Transport failure, unexpected status, or an unreadable body.
    Network,
}

impl FailureKind {
    pub fn user_message(self) -> &'static str {
        match self {
            FailureKind::Auth => {
                "Invalid API key. Check your OMDb credential."
            }
            FailureKind::Network => {
                "Connection or server error. Please try again."
            }
        }
    }
}

/// One page of search hits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPage {
    /// Total number of matches the service reports for the term.
    pub total_results: u32,
    pub items: Vec<MovieSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Page(SearchPage),
    /// Well-formed response with zero matches.
    Empty,
    Failed(FailureKind),
}

impl From<Result<SearchPage, ProviderError>> for SearchOutcome {
    fn from(result: Result<SearchPage, ProviderError>) -> Self {
        match result {
            Ok(page) if page.items.is_empty() => SearchOutcome::Empty,
            Ok(page) => SearchOutcome::Page(page),
            Err(err) => match err.failure_kind() {
                Some(kind) => SearchOutcome::Failed(kind),
                None => SearchOutcome::Empty,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailOutcome {
    Found(Box<MovieDetail>),
    NotFound,
    Failed(FailureKind),
}

impl From<Result<MovieDetail, ProviderError>> for DetailOutcome {
    fn from(result: Result<MovieDetail, ProviderError>) -> Self {
        match result {
            Ok(detail) => DetailOutcome::Found(Box::new(detail)),
            Err(err) => match err.failure_kind() {
                Some(kind) => DetailOutcome::Failed(kind),
                None => DetailOutcome::NotFound,
            },
        }
    }
}

/// Boundary to the remote movie-metadata service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetadataClient: Send + Sync {
    /// Fetch one page of matches for `term`. Pages start at 1.
    async fn search(
        &self,
        term: &str,
        page: u32,
    ) -> Result<SearchPage, ProviderError>;

    /// Fetch the full record for one identifier.
    async fn fetch_by_id(
        &self,
        id: &MovieId,
    ) -> Result<MovieDetail, ProviderError>;

    /// Get the provider name
    fn name(&self) -> &'static str;
}
