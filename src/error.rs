use thiserror::Error;

/// Errores posibles al resolver una búsqueda.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The external lookup could not be completed.
    #[error("lookup failed for '{query}': {source}")]
    LookupFailed {
        query: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    /// The lookup succeeded but returned no usable identifier.
    #[error("no video IDs found for '{query}'")]
    NoCandidatesFound { query: String },
}

impl SearchError {
    pub fn lookup_failed(query: impl Into<String>, source: anyhow::Error) -> Self {
        Self::LookupFailed {
            query: query.into(),
            source: source.into(),
        }
    }

    /// `true` for the expected "no results" outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NoCandidatesFound { .. })
    }
}
