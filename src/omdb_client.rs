//! OMDb client used to query the movie search API
use reqwest::header::{self, HeaderMap, HeaderValue};

use crate::models::MovieSearchResponse;

/// Errors raised while talking to the OMDb API
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server could not be reached, or the body could not be read
    #[error(transparent)]
    Transport(reqwest::Error),

    /// The request could not be built, e.g. an invalid base url
    #[error("Invalid request: {0}")]
    Request(reqwest::Error),

    #[error("HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("Invalid response body: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The request url carries the api key, it is stripped before the error is reported
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            ApiError::Request(err.without_url())
        } else {
            ApiError::Transport(err.without_url())
        }
    }
}

impl ApiError {
    /// returns true for network level failures
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

/// Utility class to read from the OMDb api
#[derive(Clone)]
pub struct OmdbClient {
    client: reqwest::Client,
    base_url: String,
}

impl OmdbClient {
    pub fn create(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let default_headers =
            HeaderMap::from_iter([(header::ACCEPT, HeaderValue::from_static("application/json"))]);

        let client = reqwest::Client::builder()
            .default_headers(default_headers)
            .user_agent(env!("CARGO_PKG_NAME"))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Search movies whose title matches the given query string
    pub async fn search_movies(
        &self,
        api_key: &str,
        query: &str,
    ) -> Result<MovieSearchResponse, ApiError> {
        log::info!("querying {} for movies matching {query}", self.base_url);
        let url = format!("{}/", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .get(url)
            .query(&[("apikey", api_key), ("s", query)])
            .send()
            .await?;

        if !response.status().is_success() {
            log::error!("search movies failed with status {}", response.status());
            return Err(ApiError::Status(response.status()));
        }

        let body = response.text().await?;
        let response = serde_json::from_str::<MovieSearchResponse>(&body)?;

        Ok(response)
    }
}
