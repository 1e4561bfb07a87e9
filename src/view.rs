//! Plain text rendering of the search screen
use std::fmt;

use crate::{controller::UiState, models::Movie};

pub const EMPTY_LIST_MESSAGE: &str = "No movies yet. Try searching!";

/// Renders the state the way the screen shows it: a spinner while loading, the error card
/// when there is an error, the movie list otherwise
pub struct SearchScreenView<'a> {
    state: &'a UiState,
}

impl<'a> SearchScreenView<'a> {
    pub fn new(state: &'a UiState) -> Self {
        Self { state }
    }

    fn render_movie(&self, f: &mut fmt::Formatter, movie: &Movie) -> fmt::Result {
        writeln!(f, "{}", movie.title)?;
        writeln!(f, "  Year: {}", movie.year)?;
        writeln!(f, "  imdbID: {}", movie.imdb_id)?;
        if movie.poster != "N/A" {
            writeln!(f, "  Poster: {}", movie.poster)?;
        }
        writeln!(f, "----")?;
        Ok(())
    }
}

impl<'a> fmt::Display for SearchScreenView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.state.is_loading {
            return writeln!(
                f,
                "Searching movies matching \"{}\"...",
                self.state.query.trim()
            );
        }

        if let Some(message) = &self.state.error_message {
            writeln!(f, "Error")?;
            writeln!(f, "{message}")?;
            return writeln!(f, "[:retry] Retry  [:dismiss] Dismiss");
        }

        if self.state.movies.is_empty() {
            return writeln!(f, "{EMPTY_LIST_MESSAGE}");
        }

        for movie in &self.state.movies {
            self.render_movie(f, movie)?;
        }
        Ok(())
    }
}
