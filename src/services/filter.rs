use thiserror::Error;

use crate::models::{MediaEntry, RecommendationRequest};

use super::genre_matcher::GenreMatcher;

/// Contradictions in a recommendation request
///
/// Raised before any filtering starts. Each variant names the violated
/// constraint.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidRequest {
    #[error("partial matching takes exactly one genre, got {0}")]
    PartialGenreCount(usize),
    #[error("result-count should be positive, got {0}")]
    ResultCount(i64),
    #[error("lower-bound should be positive, got {0}")]
    LowerBound(i64),
    #[error("upper-bound should be positive, got {0}")]
    UpperBound(i64),
    #[error("upper-bound ({upper}) should not be less than lower-bound ({lower})")]
    InvertedBounds { lower: i64, upper: i64 },
}

/// Returns true if the entry's episode (series) or chapter (publication)
/// count lies within the inclusive bounds
///
/// An absent count fails whenever either bound is set.
pub fn within_bounds(entry: &MediaEntry, lower: Option<i64>, upper: Option<i64>) -> bool {
    if lower.is_none() && upper.is_none() {
        return true;
    }

    let Some(count) = entry.kind.bounded_count() else {
        return false;
    };
    let count = i64::from(count);

    lower.map_or(true, |lower| lower <= count) && upper.map_or(true, |upper| count <= upper)
}

pub fn passes_adult_filter(entry: &MediaEntry, allow_adult: bool) -> bool {
    allow_adult || !entry.is_adult
}

/// Checks a request for contradictions and builds its genre matcher
pub fn validate(request: &RecommendationRequest) -> Result<GenreMatcher, InvalidRequest> {
    if request.result_count <= 0 {
        return Err(InvalidRequest::ResultCount(request.result_count));
    }

    if let Some(lower) = request.lower_bound {
        if lower <= 0 {
            return Err(InvalidRequest::LowerBound(lower));
        }
    }

    if let Some(upper) = request.upper_bound {
        if upper <= 0 {
            return Err(InvalidRequest::UpperBound(upper));
        }
    }

    if let (Some(lower), Some(upper)) = (request.lower_bound, request.upper_bound) {
        if lower > upper {
            return Err(InvalidRequest::InvertedBounds { lower, upper });
        }
    }

    GenreMatcher::new(&request.genre_terms, request.match_mode)
}

/// Filters, ranks and truncates media entries for a request
///
/// Stages run cheapest first: adult gate, bounds, genres. Survivors are
/// sorted by score descending (stable, so equal scores keep input order) and
/// cut to `result_count`. The request is validated before any entry is
/// looked at; once filtering starts this cannot fail.
pub fn recommend<I>(
    entries: I,
    request: &RecommendationRequest,
) -> Result<Vec<MediaEntry>, InvalidRequest>
where
    I: IntoIterator<Item = MediaEntry>,
{
    let matcher = validate(request)?;

    let mut total = 0usize;
    let mut survivors: Vec<MediaEntry> = entries
        .into_iter()
        .inspect(|_| total += 1)
        .filter(|entry| passes_adult_filter(entry, request.allow_adult))
        .filter(|entry| within_bounds(entry, request.lower_bound, request.upper_bound))
        .filter(|entry| matcher.accepts(&entry.genres))
        .collect();

    tracing::debug!(
        total,
        survivors = survivors.len(),
        match_mode = ?matcher.mode(),
        "Filtered media entries"
    );

    // sort_by is stable
    survivors.sort_by(|a, b| b.score.cmp(&a.score));

    // Validated positive above
    let limit = usize::try_from(request.result_count).unwrap_or(usize::MAX);
    survivors.truncate(limit);

    Ok(survivors)
}
