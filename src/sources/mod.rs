use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Fuente externa de búsqueda de videos.
///
/// Implementations perform the actual (network) search and return the raw
/// identifiers in the order they were discovered. Duplicates and empty
/// entries are allowed; the search service normalizes them. Any error is
/// treated as fatal for that query, so retries belong to the implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VideoLookup: Send + Sync {
    /// Busca videos para la query ya construida
    async fn fetch(&self, query: &str) -> Result<Vec<String>>;

    /// Nombre de la fuente
    fn source_name(&self) -> &'static str;
}

#[async_trait]
impl<T> VideoLookup for Arc<T>
where
    T: VideoLookup + ?Sized,
{
    async fn fetch(&self, query: &str) -> Result<Vec<String>> {
        (**self).fetch(query).await
    }

    fn source_name(&self) -> &'static str {
        (**self).source_name()
    }
}
