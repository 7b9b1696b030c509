use crate::{
    error::{AppError, AppResult},
    models::{MatchMode, RecommendationQuery, RecommendationRequest},
    services::vocabulary::VocabularySnapshot,
};

/// Lower-cases a genre phrase and collapses its whitespace
///
/// `"  Slice   of LIFE "` becomes `"slice of life"`.
pub fn normalize_genre(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Match mode to use when the caller did not pick one
///
/// No genres means no genre filtering; otherwise every requested genre must
/// be present.
pub fn derive_match_mode(explicit: Option<MatchMode>, genre_terms: &[String]) -> MatchMode {
    explicit.unwrap_or(if genre_terms.is_empty() {
        MatchMode::None
    } else {
        MatchMode::Contains
    })
}

/// Builds the filtering configuration from a request body
///
/// Checks only what needs no catalog data: a non-empty username and
/// non-empty genre phrases.
pub fn build_request(query: &RecommendationQuery) -> AppResult<RecommendationRequest> {
    if query.username.trim().is_empty() {
        return Err(AppError::InvalidInput("Username cannot be empty".to_string()));
    }

    let genre_terms: Vec<String> = query.genres.iter().map(|g| normalize_genre(g)).collect();
    if genre_terms.iter().any(|g| g.is_empty()) {
        return Err(AppError::InvalidInput("Genre cannot be empty".to_string()));
    }

    Ok(RecommendationRequest {
        match_mode: derive_match_mode(query.match_mode, &genre_terms),
        genre_terms,
        lower_bound: query.lower_bound,
        upper_bound: query.upper_bound,
        allow_adult: query.allow_adult,
        result_count: query.result_count,
    })
}

/// Rejects the first genre term the catalog does not know
pub fn check_genres(genre_terms: &[String], vocabulary: &VocabularySnapshot) -> AppResult<()> {
    match genre_terms.iter().find(|term| !vocabulary.contains(term)) {
        Some(unknown) => Err(AppError::InvalidInput(format!(
            "'{}' is not a valid AniList genre",
            unknown
        ))),
        None => Ok(()),
    }
}
