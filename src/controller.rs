//! Search screen state and the intents that drive it
//!
//! The controller owns a single [`UiState`] published through a `watch` channel. Every intent
//! replaces the published value, and subscribers render whatever they last received.
use std::sync::Arc;

use tokio::{sync::watch, task::JoinHandle};

use crate::{
    models::Movie,
    repository::{MovieRepository, SearchResult},
};

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a search query";

/// Snapshot of what should be rendered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    /// Query being composed, as typed
    pub query: String,
    pub movies: Vec<Movie>,
    pub is_loading: bool,
    /// Never set while `is_loading` is true
    pub error_message: Option<String>,
}

pub struct SearchController {
    repository: Arc<MovieRepository>,
    state: Arc<watch::Sender<UiState>>,
}

impl SearchController {
    pub fn new(repository: MovieRepository) -> Self {
        let (state, _) = watch::channel(UiState::default());
        Self {
            repository: Arc::new(repository),
            state: Arc::new(state),
        }
    }

    /// Current state snapshot
    pub fn state(&self) -> UiState {
        self.state.borrow().clone()
    }

    /// Subscribe to state changes
    pub fn subscribe(&self) -> watch::Receiver<UiState> {
        self.state.subscribe()
    }

    pub fn update_query(&self, query: impl Into<String>) {
        let query = query.into();
        update(&self.state, |state| UiState {
            query,
            ..state.clone()
        });
    }

    pub fn clear_error(&self) {
        update(&self.state, |state| UiState {
            error_message: None,
            ..state.clone()
        });
    }

    /// Search movies matching the current query.
    ///
    /// Returns the handle of the spawned request, or `None` when the query is blank and no
    /// request was made. Overlapping searches are not cancelled, the last one to complete
    /// wins.
    pub fn search(&self) -> Option<JoinHandle<()>> {
        let query = self.state.borrow().query.trim().to_string();
        if query.is_empty() {
            log::debug!("ignoring search for a blank query");
            update(&self.state, |state| UiState {
                error_message: Some(EMPTY_QUERY_MESSAGE.to_string()),
                ..state.clone()
            });
            return None;
        }

        update(&self.state, |state| UiState {
            is_loading: true,
            movies: vec![],
            error_message: None,
            ..state.clone()
        });

        let repository = self.repository.clone();
        let state = self.state.clone();
        Some(tokio::spawn(async move {
            let result = repository.search_movies(&query).await;
            update(&state, |current| match result {
                SearchResult::Success(movies) => {
                    log::info!("{} movies found for {query}", movies.len());
                    UiState {
                        is_loading: false,
                        movies,
                        error_message: None,
                        ..current.clone()
                    }
                }
                SearchResult::Failure(message) => UiState {
                    is_loading: false,
                    movies: vec![],
                    error_message: Some(message),
                    ..current.clone()
                },
            });
        }))
    }

    /// Re-issue the search for the current query
    pub fn retry(&self) -> Option<JoinHandle<()>> {
        self.search()
    }
}

/// Replace the published state with the value computed from the current one
fn update(state: &watch::Sender<UiState>, f: impl FnOnce(&UiState) -> UiState) {
    state.send_modify(|current| *current = f(current));
}
