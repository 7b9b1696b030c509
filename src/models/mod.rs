use serde::{Deserialize, Serialize};

mod media;
mod request;

pub use media::{ListStatus, MediaEntry, MediaKind, MediaStatus, MediaTitle};
pub use request::{
    MatchMode, MediaType, RecommendationQuery, RecommendationRequest, RecommendationResponse,
    DEFAULT_RESULT_COUNT,
};

// ============================================================================
// AniList GraphQL API Types
// ============================================================================

/// Envelope of every AniList GraphQL response
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default)]
    pub status: Option<u16>,
}

/// `data` of the paginated media list query
#[derive(Debug, Deserialize)]
pub struct ApiPageData {
    #[serde(rename = "Page")]
    pub page: ApiPage,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPage {
    #[serde(default)]
    pub page_info: Option<ApiPageInfo>,
    #[serde(default)]
    pub media_list: Vec<ApiMediaListEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiPageInfo {
    #[serde(default)]
    pub has_next_page: bool,
}

/// One row of a user's media list
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMediaListEntry {
    #[serde(default)]
    pub status: Option<ListStatus>,
    pub media: ApiMedia,
}

/// Raw media record as returned by AniList
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMedia {
    #[serde(default)]
    pub title: MediaTitle,
    #[serde(default)]
    pub episodes: Option<u32>,
    #[serde(default)]
    pub chapters: Option<u32>,
    #[serde(default)]
    pub volumes: Option<u32>,
    #[serde(default)]
    pub is_adult: Option<bool>,
    #[serde(default)]
    pub genres: Option<Vec<String>>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub average_score: Option<i32>,
    #[serde(default)]
    pub status: Option<MediaStatus>,
}

impl ApiMediaListEntry {
    /// Maps a list row into a [`MediaEntry`] of the list's media type
    pub fn into_entry(self, media_type: MediaType) -> MediaEntry {
        let media = self.media;

        let kind = match media_type {
            MediaType::Anime => MediaKind::Series {
                episodes: media.episodes,
            },
            MediaType::Manga => MediaKind::Publication {
                chapters: media.chapters,
                volumes: media.volumes,
            },
        };

        MediaEntry {
            title: media.title,
            kind,
            is_adult: media.is_adult.unwrap_or(false),
            genres: media.genres.unwrap_or_default(),
            description: media.description,
            // Unscored media rank last
            score: media.average_score.unwrap_or(0).clamp(0, 100) as u8,
            list_status: self.status,
            media_status: media.status,
        }
    }
}

/// `data` of the genre collection query
#[derive(Debug, Deserialize, Serialize)]
pub struct ApiGenreCollection {
    #[serde(rename = "GenreCollection")]
    pub genres: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_JSON: &str = r#"{
        "data": {
            "Page": {
                "pageInfo": { "hasNextPage": true },
                "mediaList": [
                    {
                        "status": "PLANNING",
                        "media": {
                            "title": { "english": "Frieren: Beyond Journey's End", "romaji": "Sousou no Frieren" },
                            "episodes": 28,
                            "chapters": null,
                            "volumes": null,
                            "isAdult": false,
                            "genres": ["Adventure", "Drama", "Fantasy"],
                            "description": "An elf mage outlives her party.",
                            "averageScore": 91,
                            "status": "FINISHED"
                        }
                    },
                    {
                        "status": "PAUSED",
                        "media": {
                            "title": { "english": null, "romaji": "Yokohama Kaidashi Kikou" },
                            "episodes": null,
                            "chapters": 142,
                            "volumes": 14,
                            "isAdult": false,
                            "genres": ["Sci-Fi", "Slice of Life"],
                            "description": null,
                            "averageScore": null,
                            "status": "FINISHED"
                        }
                    }
                ]
            }
        }
    }"#;

    #[test]
    fn test_page_deserialization() {
        let response: GraphQlResponse<ApiPageData> = serde_json::from_str(PAGE_JSON).unwrap();
        assert!(response.errors.is_empty());

        let page = response.data.unwrap().page;
        assert!(page.page_info.unwrap().has_next_page);
        assert_eq!(page.media_list.len(), 2);
        assert_eq!(page.media_list[0].status, Some(ListStatus::Planning));
        assert_eq!(page.media_list[1].media.chapters, Some(142));
    }

    #[test]
    fn test_anime_row_maps_to_series() {
        let response: GraphQlResponse<ApiPageData> = serde_json::from_str(PAGE_JSON).unwrap();
        let row = response.data.unwrap().page.media_list.into_iter().next().unwrap();

        let entry = row.into_entry(MediaType::Anime);
        assert_eq!(entry.kind, MediaKind::Series { episodes: Some(28) });
        assert_eq!(entry.score, 91);
        assert_eq!(entry.title.display(), "Frieren: Beyond Journey's End");
        assert_eq!(entry.media_status, Some(MediaStatus::Finished));
    }

    #[test]
    fn test_manga_row_maps_to_publication_with_zero_score() {
        let response: GraphQlResponse<ApiPageData> = serde_json::from_str(PAGE_JSON).unwrap();
        let row = response.data.unwrap().page.media_list.into_iter().nth(1).unwrap();

        let entry = row.into_entry(MediaType::Manga);
        assert_eq!(
            entry.kind,
            MediaKind::Publication {
                chapters: Some(142),
                volumes: Some(14)
            }
        );
        assert_eq!(entry.score, 0);
        assert_eq!(entry.list_status, Some(ListStatus::Paused));
    }

    #[test]
    fn test_errors_envelope() {
        let json = r#"{
            "data": null,
            "errors": [{ "message": "User not found", "status": 404 }]
        }"#;

        let response: GraphQlResponse<ApiPageData> = serde_json::from_str(json).unwrap();
        assert!(response.data.is_none());
        assert_eq!(response.errors[0].message, "User not found");
        assert_eq!(response.errors[0].status, Some(404));
    }

    #[test]
    fn test_genre_collection_deserialization() {
        let json = r#"{ "data": { "GenreCollection": ["Action", "Slice of Life"] } }"#;
        let response: GraphQlResponse<ApiGenreCollection> = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.unwrap().genres, vec!["Action", "Slice of Life"]);
    }
}
