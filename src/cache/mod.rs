//! # Cache Module
//!
//! Bounded in-memory caching for video search results.
//!
//! Looking up a video on the external source is slow and rate-limit
//! sensitive, so resolved queries are remembered in an LRU (Least Recently
//! Used) cache keyed by the query string.
//!
//! ## Features
//!
//! - **LRU Eviction**: Removes the least recently used entry when full
//! - **O(1) Operations**: Arena-backed doubly-linked recency list
//! - **Thread Safety**: One exclusive lock around the whole store
//! - **Shared Handles**: Cloning a cache shares the underlying store
//!
//! The cache lives for the whole process and is never persisted; eviction is
//! the only way an entry goes away.
//!
//! ## Configuration
//!
//! ```env
//! CACHE_SIZE=5000   # Maximum number of cached queries (0 disables caching)
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use video_search::cache::SearchCache;
//!
//! let cache = SearchCache::new(2);
//! cache.put("Song Artist".to_string(), "abc".to_string());
//!
//! assert_eq!(cache.get(&"Song Artist".to_string()), Some("abc".to_string()));
//! ```

pub mod lru_cache;

pub use lru_cache::LRUCache;

/// Query-to-video cache used by the search service.
///
/// Keys are cache keys built from a title and its artists; values are the
/// first video identifier a lookup produced for that query.
pub type SearchCache = LRUCache<String, String>;
