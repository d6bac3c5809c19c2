//! # Search Module
//!
//! Resolves a title/artists query to a short list of video identifiers,
//! consulting the [`SearchCache`] before going to the external lookup.
//!
//! ## Flow
//!
//! 1. Build the lookup query and the cache key (same join rule).
//! 2. On a cache hit, return the cached identifier alone.
//! 3. On a miss, call the [`VideoLookup`] once, filter empty tokens, drop
//!    duplicates (first occurrence wins) and keep at most
//!    [`MAX_CANDIDATES`].
//! 4. Cache the first candidate and return the whole list.
//!
//! Only the first candidate is cached, so a repeated query always yields a
//! single identifier once it is warm. Two concurrent misses on the same key
//! may both reach the lookup; the last write wins.
//!
//! Keys are not case-folded and internal whitespace is not collapsed:
//! `"Song  Artist"` and `"song artist"` are different entries.

use std::collections::HashSet;
use tracing::debug;

use crate::cache::SearchCache;
use crate::error::SearchError;
use crate::sources::VideoLookup;

/// Máximo de candidatos devueltos por resolución
pub const MAX_CANDIDATES: usize = 10;

/// Construye la query enviada a la fuente externa.
///
/// The title and artists are expected to be trimmed already.
pub fn build_search_query(title: &str, artists: &[String]) -> String {
    join_query(title, artists)
}

/// Construye la clave de caché para una query.
pub fn build_cache_key(title: &str, artists: &[String]) -> String {
    join_query(title, artists)
}

fn join_query(title: &str, artists: &[String]) -> String {
    std::iter::once(title)
        .chain(artists.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalizes raw lookup tokens: drops empty tokens and duplicates (first
/// occurrence wins) and stops after [`MAX_CANDIDATES`].
pub fn collect_candidates<I>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    let mut candidates = Vec::with_capacity(MAX_CANDIDATES);

    for token in raw {
        if candidates.len() >= MAX_CANDIDATES {
            break;
        }
        if token.is_empty() || seen.contains(&token) {
            continue;
        }
        seen.insert(token.clone());
        candidates.push(token);
    }

    candidates
}

/// Servicio de búsqueda con caché LRU delante de la fuente externa.
pub struct VideoSearchService<L> {
    cache: SearchCache,
    lookup: L,
}

impl<L: VideoLookup> VideoSearchService<L> {
    /// Creates a service over an explicitly injected cache handle.
    pub fn new(cache: SearchCache, lookup: L) -> Self {
        Self { cache, lookup }
    }

    pub fn with_capacity(capacity: usize, lookup: L) -> Self {
        Self::new(SearchCache::new(capacity), lookup)
    }

    pub fn cache(&self) -> &SearchCache {
        &self.cache
    }

    /// Resolves `title` and `artists` to an ordered, deduplicated list of at
    /// most [`MAX_CANDIDATES`] video identifiers.
    ///
    /// # Errors
    ///
    /// - [`SearchError::LookupFailed`] if the lookup returns an error.
    /// - [`SearchError::NoCandidatesFound`] if it returns no non-empty token.
    ///
    /// Neither case touches the cache.
    pub async fn search_videos(
        &self,
        title: &str,
        artists: &[String],
    ) -> Result<Vec<String>, SearchError> {
        let query = build_search_query(title, artists);
        let cache_key = build_cache_key(title, artists);

        // Verificar caché primero
        if let Some(video_id) = self.cache.get(&cache_key) {
            debug!("✅ Cache HIT para key: {}", cache_key);
            return Ok(vec![video_id]);
        }
        debug!("❌ Cache MISS para key: {}", cache_key);

        let raw = self
            .lookup
            .fetch(&query)
            .await
            .map_err(|e| SearchError::lookup_failed(query.as_str(), e))?;

        let candidates = collect_candidates(raw);

        let Some(first) = candidates.first() else {
            return Err(SearchError::NoCandidatesFound { query });
        };

        debug!(
            "💾 Cacheando video ID {} ({}) para key: {}",
            first,
            self.lookup.source_name(),
            cache_key
        );
        self.cache.put(cache_key, first.clone());

        Ok(candidates)
    }
}
