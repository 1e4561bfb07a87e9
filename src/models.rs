//! Data returned by the OMDb search API
// See [API doc](https://www.omdbapi.com/#parameters)
use serde::{Deserialize, Serialize};

/// A single movie returned in the `Search` array of the OMDb search API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Movie {
    #[serde(rename = "Title")]
    pub title: String,

    /// Release year as sent by the API, may be a range for series ("2008–2013")
    #[serde(rename = "Year")]
    pub year: String,

    #[serde(rename = "imdbID")]
    pub imdb_id: String,

    /// Poster image URL, or "N/A" when the API has none
    #[serde(rename = "Poster")]
    pub poster: String,
}

/// Envelope of the OMDb search API response
#[derive(Debug, Deserialize)]
pub struct MovieSearchResponse {
    /// "True" or "False"
    #[serde(rename = "Response")]
    pub response: String,

    #[serde(rename = "Search")]
    #[serde(default)]
    pub search: Option<Vec<Movie>>,

    #[serde(rename = "Error")]
    #[serde(default)]
    pub error: Option<String>,
}

impl MovieSearchResponse {
    /// returns weather or not the API reported a successful search
    pub fn is_success(&self) -> bool {
        self.response.eq_ignore_ascii_case("true")
    }
}
