use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, RwLock};

use crate::{error::AppResult, services::providers::CatalogProvider};

/// Genre names as of a point in time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VocabularySnapshot {
    pub genres: Vec<String>,
    pub fetched_at: DateTime<Utc>,
}

impl VocabularySnapshot {
    /// Case-insensitive membership test
    pub fn contains(&self, genre: &str) -> bool {
        self.genres.iter().any(|known| known.eq_ignore_ascii_case(genre))
    }

    fn age(&self, now: DateTime<Utc>) -> Duration {
        // A fetched_at in the future counts as brand new
        (now - self.fetched_at).to_std().unwrap_or_default()
    }
}

/// The catalog's valid genre names, fetched on first use and re-fetched once
/// older than `ttl`
///
/// If a refresh fails while an older snapshot exists, the stale snapshot is
/// served and the failure logged. Refreshes are serialised: callers that find
/// the snapshot expired while another refresh is running wait for it and reuse
/// its result.
pub struct GenreVocabulary {
    provider: Arc<dyn CatalogProvider>,
    ttl: Duration,
    snapshot: RwLock<Option<VocabularySnapshot>>,
    refresh_lock: Mutex<()>,
}

impl GenreVocabulary {
    pub fn new(provider: Arc<dyn CatalogProvider>, ttl: Duration) -> Self {
        Self {
            provider,
            ttl,
            snapshot: RwLock::new(None),
            refresh_lock: Mutex::new(()),
        }
    }

    /// The stored snapshot, if one exists and is younger than `ttl`
    async fn fresh(&self) -> Option<VocabularySnapshot> {
        self.snapshot
            .read()
            .await
            .as_ref()
            .filter(|snapshot| snapshot.age(Utc::now()) < self.ttl)
            .cloned()
    }

    /// Current vocabulary, refreshing it first if missing or expired
    pub async fn snapshot(&self) -> AppResult<VocabularySnapshot> {
        if let Some(snapshot) = self.fresh().await {
            return Ok(snapshot);
        }

        let _refreshing = self.refresh_lock.lock().await;

        // Another caller may have refreshed while this one waited
        if let Some(snapshot) = self.fresh().await {
            return Ok(snapshot);
        }

        match self.fetch().await {
            Ok(snapshot) => Ok(snapshot),
            Err(e) => match self.snapshot.read().await.clone() {
                Some(stale) => {
                    tracing::warn!(
                        error = %e,
                        fetched_at = %stale.fetched_at,
                        "Genre vocabulary refresh failed, serving stale copy"
                    );
                    Ok(stale)
                }
                None => Err(e),
            },
        }
    }

    /// Fetches the vocabulary from the provider unconditionally
    pub async fn refresh(&self) -> AppResult<VocabularySnapshot> {
        let _refreshing = self.refresh_lock.lock().await;
        self.fetch().await
    }

    async fn fetch(&self) -> AppResult<VocabularySnapshot> {
        let genres = self.provider.fetch_genre_collection().await?;

        let snapshot = VocabularySnapshot {
            genres,
            fetched_at: Utc::now(),
        };

        tracing::info!(
            genres = snapshot.genres.len(),
            provider = self.provider.name(),
            "Genre vocabulary refreshed"
        );

        *self.snapshot.write().await = Some(snapshot.clone());
        Ok(snapshot)
    }
}
