//! Request/response contract for the HTTP layer.
//!
//! The web framework is not part of this crate; this module holds what the
//! handler needs around [`VideoSearchService::search_videos`]: input
//! normalization, the response shape and the mapping of search errors to an
//! outcome with a status code.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info, warn};
use url::Url;

use crate::error::SearchError;
use crate::search::VideoSearchService;
use crate::sources::VideoLookup;

const WATCH_URL: &str = "https://www.youtube.com/watch";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("The title can't be empty.")]
    EmptyTitle,
}

/// Query normalizada: título recortado y artistas sin entradas vacías.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchInput {
    pub title: String,
    pub artists: Vec<String>,
}

impl SearchInput {
    /// Builds an input from the raw `title` and comma-separated `artists`
    /// parameters.
    pub fn parse(title: &str, artists_param: &str) -> Result<Self, RequestError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(RequestError::EmptyTitle);
        }

        Ok(Self {
            title: title.to_string(),
            artists: split_artists(artists_param),
        })
    }
}

/// Divide "A, B,,C" en ["A", "B", "C"].
pub fn split_artists(artists_param: &str) -> Vec<String> {
    artists_param
        .split(',')
        .map(str::trim)
        .filter(|artist| !artist.is_empty())
        .map(String::from)
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchVideo {
    pub id: String,
    pub url: String,
}

impl SearchVideo {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let url = watch_url(&id);
        Self { id, url }
    }
}

fn watch_url(video_id: &str) -> String {
    match Url::parse_with_params(WATCH_URL, &[("v", video_id)]) {
        Ok(url) => url.into(),
        Err(_) => format!("{WATCH_URL}?v={video_id}"),
    }
}

/// Body returned for a successful search. `video` is `None` when nothing was
/// found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub input: SearchInput,
    pub video: Option<SearchVideo>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(SearchResponse),
    BadRequest(String),
    Failed(String),
}

impl SearchOutcome {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Found(_) => 200,
            Self::BadRequest(_) => 400,
            Self::Failed(_) => 500,
        }
    }
}

/// Handles one search request end to end.
///
/// "No candidates" is a normal empty result (200 with `video: null`); a
/// failed lookup is a server error.
pub async fn handle_search<L: VideoLookup>(
    service: &VideoSearchService<L>,
    title: &str,
    artists_param: &str,
) -> SearchOutcome {
    let input = match SearchInput::parse(title, artists_param) {
        Ok(input) => input,
        Err(e) => {
            warn!("⚠️ Búsqueda rechazada: {}", e);
            return SearchOutcome::BadRequest(e.to_string());
        }
    };

    let video = match service.search_videos(&input.title, &input.artists).await {
        Ok(ids) => ids.into_iter().next().map(SearchVideo::new),
        Err(e @ SearchError::NoCandidatesFound { .. }) => {
            info!("🔍 Búsqueda sin resultados: {}", e);
            None
        }
        Err(e) => {
            error!(
                "❌ Error buscando '{}' con artistas {:?}: {}",
                input.title, input.artists, e
            );
            return SearchOutcome::Failed("Failed to search YouTube".to_string());
        }
    };

    SearchOutcome::Found(SearchResponse { input, video })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::MockVideoLookup;
    use pretty_assertions::assert_eq;

    fn service_returning(
        result: fn() -> anyhow::Result<Vec<String>>,
    ) -> VideoSearchService<MockVideoLookup> {
        let mut lookup = MockVideoLookup::new();
        lookup.expect_fetch().returning(move |_| result());
        lookup.expect_source_name().return_const("mock");
        VideoSearchService::with_capacity(10, lookup)
    }

    #[test]
    fn test_parse_trims_and_splits() {
        let input = SearchInput::parse("  Euphoria ", " Loreen ,, Someone ,").unwrap();

        assert_eq!(input.title, "Euphoria");
        assert_eq!(input.artists, vec!["Loreen".to_string(), "Someone".to_string()]);
    }

    #[test]
    fn test_parse_rejects_blank_title() {
        assert_eq!(SearchInput::parse("   ", "Artist"), Err(RequestError::EmptyTitle));
    }

    #[test]
    fn test_split_artists_empty_param() {
        assert!(split_artists("").is_empty());
        assert!(split_artists(" , ,").is_empty());
    }

    #[test]
    fn test_watch_url() {
        let video = SearchVideo::new("dQw4w9WgXcQ");
        assert_eq!(video.url, "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
    }

    #[tokio::test]
    async fn test_handle_search_found() {
        let service = service_returning(|| Ok(vec!["abc".into(), "def".into()]));

        let outcome = handle_search(&service, "Song", "Artist").await;

        assert_eq!(outcome.status_code(), 200);
        let SearchOutcome::Found(response) = outcome else {
            panic!("expected Found");
        };
        assert_eq!(response.video, Some(SearchVideo::new("abc")));
    }

    #[tokio::test]
    async fn test_handle_search_no_results_is_ok() {
        let service = service_returning(|| Ok(vec![String::new()]));

        let outcome = handle_search(&service, "Song", "").await;

        let SearchOutcome::Found(response) = outcome else {
            panic!("expected Found");
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "input": { "title": "Song", "artists": [] },
                "video": null
            })
        );
    }

    #[tokio::test]
    async fn test_handle_search_lookup_failure() {
        let service = service_returning(|| Err(anyhow::anyhow!("status 503")));

        let outcome = handle_search(&service, "Song", "Artist").await;

        assert_eq!(outcome.status_code(), 500);
        assert_eq!(outcome, SearchOutcome::Failed("Failed to search YouTube".into()));
    }

    #[tokio::test]
    async fn test_handle_search_empty_title() {
        let service = service_returning(|| Ok(vec!["abc".into()]));

        let outcome = handle_search(&service, " ", "Artist").await;

        assert_eq!(outcome.status_code(), 400);
        assert_eq!(outcome, SearchOutcome::BadRequest("The title can't be empty.".into()));
    }
}
