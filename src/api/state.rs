use std::sync::Arc;
use std::time::Duration;

use crate::services::{CatalogProvider, GenreVocabulary};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn CatalogProvider>,
    pub vocabulary: Arc<GenreVocabulary>,
}

impl AppState {
    /// Creates state whose genre vocabulary is fetched through `provider`
    /// and considered stale after `vocabulary_ttl`
    pub fn new(provider: Arc<dyn CatalogProvider>, vocabulary_ttl: Duration) -> Self {
        let vocabulary = Arc::new(GenreVocabulary::new(provider.clone(), vocabulary_ttl));
        Self {
            provider,
            vocabulary,
        }
    }
}
