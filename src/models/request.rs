use serde::{Deserialize, Serialize};

use super::{ListStatus, MediaEntry};

/// How requested genres are compared against an entry's genres
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// No genre filtering
    #[default]
    None,
    /// Entry genres must equal the requested genres exactly
    Strict,
    /// A single requested genre must be present
    Partial,
    /// Every requested genre must be present, extras are ignored
    Contains,
}

/// Type of media list to fetch
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Anime,
    Manga,
}

impl MediaType {
    /// Value of the AniList `MediaType` enum
    pub fn as_api_str(&self) -> &'static str {
        match self {
            MediaType::Anime => "ANIME",
            MediaType::Manga => "MANGA",
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaType::Anime => write!(f, "anime"),
            MediaType::Manga => write!(f, "manga"),
        }
    }
}

pub const DEFAULT_RESULT_COUNT: i64 = 5;

/// Validated filtering configuration consumed by the recommendation filter
///
/// Bounds and the result count stay signed so that non-positive values can be
/// reported rather than rejected by the type system.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationRequest {
    pub genre_terms: Vec<String>,
    pub match_mode: MatchMode,
    pub lower_bound: Option<i64>,
    pub upper_bound: Option<i64>,
    pub allow_adult: bool,
    pub result_count: i64,
}

impl Default for RecommendationRequest {
    fn default() -> Self {
        Self {
            genre_terms: Vec::new(),
            match_mode: MatchMode::None,
            lower_bound: None,
            upper_bound: None,
            allow_adult: false,
            result_count: DEFAULT_RESULT_COUNT,
        }
    }
}

fn default_result_count() -> i64 {
    DEFAULT_RESULT_COUNT
}

fn default_statuses() -> Vec<ListStatus> {
    vec![ListStatus::Planning, ListStatus::Paused]
}

/// Body of `POST /api/v1/recommendations`
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationQuery {
    pub username: String,
    pub media_type: MediaType,
    #[serde(default)]
    pub genres: Vec<String>,
    /// Derived from `genres` when omitted
    #[serde(default)]
    pub match_mode: Option<MatchMode>,
    #[serde(default)]
    pub lower_bound: Option<i64>,
    #[serde(default)]
    pub upper_bound: Option<i64>,
    #[serde(default)]
    pub allow_adult: bool,
    #[serde(default = "default_result_count")]
    pub result_count: i64,
    /// List statuses to recommend from; empty keeps every status
    #[serde(default = "default_statuses")]
    pub statuses: Vec<ListStatus>,
}

/// Response of `POST /api/v1/recommendations`
#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub username: String,
    pub media_type: MediaType,
    pub count: usize,
    pub recommendations: Vec<MediaEntry>,
}
