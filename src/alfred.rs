//! Data representation for Alfred result items
// See [specifications](https://www.alfredapp.com/help/workflows/inputs/script-filter/json/)
use serde::Serialize;

use crate::{controller::UiState, models::Movie};

/// Script filter document
#[derive(Serialize, Default)]
pub struct AlfredOutput {
    pub items: Vec<AlfredItem>,
}

#[derive(Serialize, Default)]
pub struct AlfredItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// The title displayed in the result row
    pub title: String,
    pub subtitle: String,
    /// Value passed to the next workflow action, the IMDb page of the movie
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arg: Option<String>,
    pub valid: bool,
}

impl From<String> for AlfredItem {
    fn from(val: String) -> Self {
        Self {
            title: val,
            ..Default::default()
        }
    }
}

impl From<Movie> for AlfredItem {
    fn from(val: Movie) -> Self {
        Self {
            subtitle: format!("Year: {} · imdbID: {}", val.year, val.imdb_id),
            arg: Some(format!("https://www.imdb.com/title/{}/", val.imdb_id)),
            uid: Some(val.imdb_id),
            title: val.title,
            valid: true,
        }
    }
}

impl From<UiState> for AlfredOutput {
    fn from(state: UiState) -> Self {
        let items = match state.error_message {
            Some(message) => vec![message.into()],
            None if state.movies.is_empty() => vec!["No movies found".to_string().into()],
            None => state.movies.into_iter().map(AlfredItem::from).collect(),
        };
        Self { items }
    }
}
