#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use cinescope_core::providers::{MetadataClient, ProviderError, SearchPage};
use cinescope_model::{
    Attribute, DEFAULT_POSTER_PLACEHOLDER, MovieDetail, MovieId, MovieSummary,
    PosterUrl,
};
use reqwest::StatusCode;

/// Canned reply for one request.
#[derive(Debug, Clone)]
pub enum Reply<T> {
    Ok(T),
    Missing,
    Unauthorized,
    ServerError,
}

impl<T> Reply<T> {
    fn into_result(self, missing: ProviderError) -> Result<T, ProviderError> {
        match self {
            Reply::Ok(value) => Ok(value),
            Reply::Missing => Err(missing),
            Reply::Unauthorized => Err(ProviderError::InvalidApiKey {
                status: StatusCode::UNAUTHORIZED,
            }),
            Reply::ServerError => {
                Err(ProviderError::Status(StatusCode::INTERNAL_SERVER_ERROR))
            }
        }
    }
}

/// In-memory metadata client answering from a script keyed by request.
/// Unscripted searches report no results; unscripted lookups report not
/// found.
#[derive(Debug, Default)]
pub struct ScriptedClient {
    pages: Mutex<HashMap<(String, u32), Reply<SearchPage>>>,
    details: Mutex<HashMap<String, Reply<MovieDetail>>>,
    search_calls: AtomicUsize,
    detail_calls: AtomicUsize,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, term: &str, page: u32, reply: Reply<SearchPage>) -> Self {
        self.pages
            .lock()
            .unwrap()
            .insert((term.to_string(), page), reply);
        self
    }

    pub fn with_detail(self, id: &str, reply: Reply<MovieDetail>) -> Self {
        self.details.lock().unwrap().insert(id.to_string(), reply);
        self
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MetadataClient for ScriptedClient {
    async fn search(
        &self,
        term: &str,
        page: u32,
    ) -> Result<SearchPage, ProviderError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        let reply = self
            .pages
            .lock()
            .unwrap()
            .get(&(term.to_string(), page))
            .cloned()
            .unwrap_or(Reply::Missing);
        reply.into_result(ProviderError::NoResults)
    }

    async fn fetch_by_id(
        &self,
        id: &MovieId,
    ) -> Result<MovieDetail, ProviderError> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        let reply = self
            .details
            .lock()
            .unwrap()
            .get(id.as_str())
            .cloned()
            .unwrap_or(Reply::Missing);
        reply.into_result(ProviderError::NotFound)
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

pub fn summary(id: &str) -> MovieSummary {
    MovieSummary::new(
        id,
        format!("Title {id}"),
        "2001",
        PosterUrl::resolve(None, DEFAULT_POSTER_PLACEHOLDER),
    )
}

/// Ids `tt{from}..=tt{to}`.
pub fn ids(from: u32, to: u32) -> Vec<String> {
    (from..=to).map(|n| format!("tt{n}")).collect()
}

pub fn page_of<S: AsRef<str>>(ids: &[S], total: u32) -> SearchPage {
    SearchPage {
        total_results: total,
        items: ids.iter().map(|id| summary(id.as_ref())).collect(),
    }
}

pub fn detail(id: &str) -> MovieDetail {
    MovieDetail {
        summary: summary(id),
        director: Attribute::from("Christopher Nolan"),
        actors: Attribute::from("Christian Bale, Michael Caine"),
        plot: Attribute::missing(),
        genre: Attribute::from("Action"),
        rating: Attribute::from("8.2"),
    }
}
