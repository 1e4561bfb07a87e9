//! Turns OMDb client calls into a plain success / failure result
use crate::{models::Movie, omdb_client::OmdbClient};

/// Outcome of one movie search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    Success(Vec<Movie>),
    Failure(String),
}

/// Wraps the OMDb client together with the api key used to authorize calls
#[derive(Clone)]
pub struct MovieRepository {
    client: OmdbClient,
    api_key: String,
}

impl MovieRepository {
    pub fn new(client: OmdbClient, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
        }
    }

    /// Search movies matching the query. Errors never escape this call, they are reported as
    /// a [`SearchResult::Failure`] message instead
    pub async fn search_movies(&self, query: &str) -> SearchResult {
        match self.client.search_movies(&self.api_key, query).await {
            Ok(response) if response.is_success() => {
                SearchResult::Success(response.search.unwrap_or_default())
            }
            Ok(response) => {
                log::info!(
                    "no results for {query}: {}",
                    response.error.as_deref().unwrap_or("no error message")
                );
                SearchResult::Failure("No results".to_string())
            }
            Err(err) if err.is_transport() => {
                log::error!("network error while searching {query}: {err}");
                SearchResult::Failure(format!("Network error: {err}"))
            }
            Err(err) => {
                log::error!("search for {query} failed: {err}");
                SearchResult::Failure(format!("Unexpected error: {err}"))
            }
        }
    }
}
