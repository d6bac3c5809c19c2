//! # Video Search
//!
//! Finds a video identifier for a title/artist query through an external
//! lookup and remembers the answer in a bounded LRU cache.
//!
//! ```rust,no_run
//! use video_search::{cache::SearchCache, search::VideoSearchService, sources::VideoLookup};
//!
//! # async fn example(lookup: impl VideoLookup) -> anyhow::Result<()> {
//! let service = VideoSearchService::new(SearchCache::new(5000), lookup);
//! let ids = service.search_videos("Euphoria", &["Loreen".to_string()]).await?;
//! println!("Mejor resultado: {}", ids[0]);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod search;
pub mod sources;
pub mod telemetry;

pub use cache::SearchCache;
pub use config::Config;
pub use error::SearchError;
pub use search::{VideoSearchService, MAX_CANDIDATES};
pub use sources::VideoLookup;
