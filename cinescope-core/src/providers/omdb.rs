use async_trait::async_trait;
use cinescope_config::{ApiConfig, ApiKey, Config};
use cinescope_model::{
    Attribute, MovieDetail, MovieId, MovieSummary, PosterUrl,
};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use super::traits::{MetadataClient, ProviderError, SearchPage};

/// Body flag the service uses to report success.
const RESPONSE_TRUE: &str = "True";

/// reqwest-backed client for the OMDb wire contract.
///
/// Search is `GET ?apikey=K&s=TERM&page=N`; lookup is
/// `GET ?apikey=K&i=ID&plot=full`. "No results" arrives as
/// `"Response": "False"` in a 200 body, while credential problems arrive as
/// HTTP 401/403.
#[derive(Debug, Clone)]
pub struct OmdbClient {
    client: Client,
    base_url: Url,
    api_key: ApiKey,
    placeholder_poster: String,
}

#[derive(Debug, Deserialize)]
struct OmdbSearchResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Search", default)]
    search: Vec<OmdbSearchItem>,
    #[serde(rename = "totalResults")]
    total_results: Option<String>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OmdbSearchItem {
    #[serde(rename = "imdbID", default)]
    imdb_id: String,
    #[serde(rename = "Title", default)]
    title: String,
    #[serde(rename = "Year", default)]
    year: String,
    #[serde(rename = "Poster")]
    poster: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OmdbDetailResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "imdbID")]
    imdb_id: Option<String>,
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "Poster")]
    poster: Option<String>,
    #[serde(rename = "Director")]
    director: Option<String>,
    #[serde(rename = "Actors")]
    actors: Option<String>,
    #[serde(rename = "Plot")]
    plot: Option<String>,
    #[serde(rename = "Genre")]
    genre: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

impl OmdbClient {
    pub fn new(
        api: &ApiConfig,
        placeholder_poster: impl Into<String>,
    ) -> Result<Self, ProviderError> {
        let client = Client::builder().timeout(api.request_timeout).build()?;

        tracing::info!(base_url = %api.base_url, "creating OMDb client");

        Ok(Self {
            client,
            base_url: api.base_url.clone(),
            api_key: api.api_key.clone(),
            placeholder_poster: placeholder_poster.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ProviderError> {
        Self::new(&config.api, config.presentation.placeholder_poster.clone())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        params: &[(&str, &str)],
    ) -> Result<T, ProviderError> {
        let response = self
            .client
            .get(self.base_url.clone())
            .query(&[("apikey", self.api_key.expose())])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN
        {
            return Err(ProviderError::InvalidApiKey { status });
        }

        if !status.is_success() {
            return Err(ProviderError::Status(status));
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| ProviderError::Parse(e.to_string()))
    }

    fn summary_from(&self, item: OmdbSearchItem) -> MovieSummary {
        MovieSummary {
            id: MovieId::new(item.imdb_id.trim()),
            title: item.title,
            year: item.year,
            poster_url: PosterUrl::resolve(
                item.poster.as_deref(),
                &self.placeholder_poster,
            ),
        }
    }
}

#[async_trait]
impl MetadataClient for OmdbClient {
    async fn search(
        &self,
        term: &str,
        page: u32,
    ) -> Result<SearchPage, ProviderError> {
        tracing::debug!(term, page, "OMDb search");

        let page_param = page.to_string();
        let body: OmdbSearchResponse = self
            .get_json(&[("s", term), ("page", page_param.as_str())])
            .await?;

        if body.response != RESPONSE_TRUE {
            tracing::debug!(
                term,
                page,
                reason = body.error.as_deref().unwrap_or("unspecified"),
                "OMDb reported no results"
            );
            return Err(ProviderError::NoResults);
        }

        let total_results = body
            .total_results
            .as_deref()
            .map(str::trim)
            .ok_or_else(|| {
                ProviderError::Parse("missing totalResults".to_string())
            })?
            .parse::<u32>()
            .map_err(|e| {
                ProviderError::Parse(format!("invalid totalResults: {e}"))
            })?;

        let items: Vec<MovieSummary> = body
            .search
            .into_iter()
            .filter(|item| {
                let keep = !item.imdb_id.trim().is_empty();
                if !keep {
                    tracing::warn!(title = %item.title, "dropping search hit without an id");
                }
                keep
            })
            .map(|item| self.summary_from(item))
            .collect();

        tracing::info!(
            term,
            page,
            returned = items.len(),
            total_results,
            "OMDb search page received"
        );

        Ok(SearchPage {
            total_results,
            items,
        })
    }

    async fn fetch_by_id(
        &self,
        id: &MovieId,
    ) -> Result<MovieDetail, ProviderError> {
        tracing::debug!(%id, "OMDb lookup");

        let body: OmdbDetailResponse = self
            .get_json(&[("i", id.as_str()), ("plot", "full")])
            .await?;

        if body.response != RESPONSE_TRUE {
            tracing::debug!(
                %id,
                reason = body.error.as_deref().unwrap_or("unspecified"),
                "OMDb lookup did not resolve"
            );
            return Err(ProviderError::NotFound);
        }

        let resolved_id = body
            .imdb_id
            .filter(|value| !value.trim().is_empty())
            .map(MovieId::new)
            .unwrap_or_else(|| id.clone());

        Ok(MovieDetail {
            summary: MovieSummary {
                id: resolved_id,
                title: body.title.unwrap_or_default(),
                year: Attribute::from_service(body.year.as_deref()).to_string(),
                poster_url: PosterUrl::resolve(
                    body.poster.as_deref(),
                    &self.placeholder_poster,
                ),
            },
            director: Attribute::from_service(body.director.as_deref()),
            actors: Attribute::from_service(body.actors.as_deref()),
            plot: Attribute::from_service(body.plot.as_deref()),
            genre: Attribute::from_service(body.genre.as_deref()),
            rating: Attribute::from_service(body.imdb_rating.as_deref()),
        })
    }

    fn name(&self) -> &'static str {
        "omdb"
    }
}
