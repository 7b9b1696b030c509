use axum::{extract::State, http::StatusCode, Extension, Json};
use serde_json::{json, Value};

use crate::{
    error::AppResult,
    middleware::RequestId,
    models::{RecommendationQuery, RecommendationResponse},
    services::{recommendations, VocabularySnapshot},
};

use super::AppState;

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Current genre vocabulary, fetched if stale
pub async fn get_genres(State(state): State<AppState>) -> AppResult<Json<VocabularySnapshot>> {
    let snapshot = state.vocabulary.snapshot().await?;
    Ok(Json(snapshot))
}

/// Forces a genre vocabulary refresh
pub async fn refresh_genres(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> AppResult<Json<VocabularySnapshot>> {
    tracing::info!(request_id = %request_id, "Refreshing genre vocabulary");

    let snapshot = state.vocabulary.refresh().await?;
    Ok(Json(snapshot))
}

/// Handler for recommendations endpoint
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(query): Json<RecommendationQuery>,
) -> AppResult<Json<RecommendationResponse>> {
    tracing::info!(
        request_id = %request_id,
        username = %query.username,
        media_type = %query.media_type,
        genres = query.genres.len(),
        "Processing recommendation request"
    );

    let response = recommendations::get_recommendations(
        state.provider.as_ref(),
        state.vocabulary.as_ref(),
        query,
    )
    .await
    .inspect_err(|e| {
        tracing::warn!(request_id = %request_id, error = %e, "Recommendation failed")
    })?;

    tracing::info!(
        request_id = %request_id,
        count = response.count,
        "Recommendation completed"
    );

    Ok(Json(response))
}
