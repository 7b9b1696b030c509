use std::time::Instant;

use crate::{
    error::AppResult,
    models::{ListStatus, MediaEntry, RecommendationQuery, RecommendationResponse},
    services::{filter, providers::CatalogProvider, validation, vocabulary::GenreVocabulary},
};

/// Keeps entries whose list status is one of `statuses`
///
/// An empty `statuses` keeps everything.
pub fn retain_statuses(entries: Vec<MediaEntry>, statuses: &[ListStatus]) -> Vec<MediaEntry> {
    if statuses.is_empty() {
        return entries;
    }

    entries
        .into_iter()
        .filter(|entry| {
            entry
                .list_status
                .is_some_and(|status| statuses.contains(&status))
        })
        .collect()
}

/// Generates recommendations from a user's own list
///
/// 1. Build and check the filtering configuration (fails before any fetch)
/// 2. Check requested genres against the catalog vocabulary
/// 3. Fetch the user's list and keep the requested list statuses
/// 4. Filter, rank and truncate
pub async fn get_recommendations(
    provider: &dyn CatalogProvider,
    vocabulary: &GenreVocabulary,
    query: RecommendationQuery,
) -> AppResult<RecommendationResponse> {
    let start = Instant::now();

    let request = validation::build_request(&query)?;
    filter::validate(&request)?;

    if !request.genre_terms.is_empty() {
        let snapshot = vocabulary.snapshot().await?;
        validation::check_genres(&request.genre_terms, &snapshot)?;
    }

    let entries = provider
        .fetch_media_list(&query.username, query.media_type)
        .await?;
    let fetched = entries.len();

    let candidates = retain_statuses(entries, &query.statuses);
    let candidate_count = candidates.len();

    let recommendations = filter::recommend(candidates, &request)?;

    tracing::info!(
        username = %query.username,
        media_type = %query.media_type,
        fetched,
        candidates = candidate_count,
        returned = recommendations.len(),
        duration_ms = start.elapsed().as_millis() as u64,
        "Recommendations generated"
    );

    Ok(RecommendationResponse {
        username: query.username,
        media_type: query.media_type,
        count: recommendations.len(),
        recommendations,
    })
}
