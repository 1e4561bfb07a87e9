//! Interactive search session reading intents line by line
use futures::StreamExt;
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    task::JoinHandle,
};
use tokio_stream::wrappers::WatchStream;

use crate::controller::{SearchController, UiState};

/// Drive the controller from `input` and hand every new state to `render`.
///
/// A plain line sets the query and searches, `:retry` runs the last search again, `:dismiss`
/// hides the current error and `:quit` leaves right away. When the input ends, the pending
/// search is awaited so its outcome still gets rendered.
pub async fn run_session<R, F>(
    controller: SearchController,
    input: R,
    mut render: F,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    F: FnMut(&UiState) + Send + 'static,
{
    let mut states = WatchStream::new(controller.subscribe());
    let renderer = tokio::spawn(async move {
        while let Some(state) = states.next().await {
            render(&state);
        }
    });

    let mut pending: Option<JoinHandle<()>> = None;
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            ":quit" | ":q" => {
                log::info!("leaving interactive session");
                renderer.abort();
                return Ok(());
            }
            ":retry" => pending = controller.retry().or(pending),
            ":dismiss" => controller.clear_error(),
            _ => {
                controller.update_query(line);
                pending = controller.search().or(pending);
            }
        }
    }

    log::info!("end of input, waiting for the last search");
    if let Some(search) = pending {
        search.await?;
    }

    // the state stream ends once the controller, and the sender it owns, is gone
    drop(controller);
    renderer.await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::run_session;
    use crate::{
        controller::{SearchController, UiState},
        omdb_client::OmdbClient,
        repository::MovieRepository,
    };
    use httpmock::{Method::GET, MockServer};
    use std::{
        sync::{Arc, Mutex},
        time::Duration,
    };

    fn controller(base_url: String) -> SearchController {
        let client = OmdbClient::create(base_url).unwrap();
        SearchController::new(MovieRepository::new(client, "secret"))
    }

    fn recorder() -> (Arc<Mutex<Vec<UiState>>>, impl FnMut(&UiState) + Send + 'static) {
        let rendered = Arc::new(Mutex::new(vec![]));
        let sink = rendered.clone();
        (rendered, move |state: &UiState| {
            sink.lock().unwrap().push(state.clone())
        })
    }

    #[tokio::test]
    async fn end_of_input_waits_for_pending_search() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/").query_param("s", "Batman");
                then.status(200)
                    .delay(Duration::from_millis(200))
                    .body(
                        r#"{"Response":"True","Search":[{"Title":"Batman","Year":"1989","imdbID":"tt0096895","Poster":"url"}]}"#,
                    );
            })
            .await;

        let (rendered, render) = recorder();
        run_session(controller(server.base_url()), &b"Batman\n"[..], render)
            .await
            .unwrap();

        let rendered = rendered.lock().unwrap();
        let last = rendered.last().unwrap();
        assert!(!last.is_loading);
        assert_eq!(last.movies.len(), 1);
        assert_eq!(last.movies[0].imdb_id, "tt0096895");
    }

    #[tokio::test]
    async fn dismiss_clears_the_error() {
        let (rendered, render) = recorder();
        run_session(
            controller("http://127.0.0.1:1".to_string()),
            &b"   \n:dismiss\n"[..],
            render,
        )
        .await
        .unwrap();

        let rendered = rendered.lock().unwrap();
        assert_eq!(rendered.last().unwrap().error_message, None);
    }

    #[tokio::test]
    async fn quit_stops_reading() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/");
                then.status(200).body(r#"{"Response":"True","Search":[]}"#);
            })
            .await;

        let (_, render) = recorder();
        run_session(
            controller(server.base_url()),
            &b":quit\nBatman\n"[..],
            render,
        )
        .await
        .unwrap();

        assert_eq!(mock.hits_async().await, 0);
    }
}
