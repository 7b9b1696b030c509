//! AniList GraphQL provider
//!
//! API Flow:
//! 1. Media list: `Page.mediaList(userName, type)` walked page by page until an
//!    empty page or `hasNextPage == false`
//! 2. Genres: `GenreCollection`
//!
//! Media lists go through the Redis cache. The genre collection is always
//! fetched live; `GenreVocabulary` keeps it in memory and decides when to
//! refresh.

use crate::{
    cached,
    config::Config,
    db::{Cache, CacheKey},
    error::{AppError, AppResult},
    models::{
        ApiGenreCollection, ApiPage, ApiPageData, GraphQlError, GraphQlResponse, MediaEntry,
        MediaType,
    },
    services::providers::CatalogProvider,
};
use reqwest::{Client as HttpClient, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

const MEDIA_LIST_QUERY: &str = r#"
query ($page: Int, $perPage: Int, $userName: String, $type: MediaType) {
    Page (page: $page, perPage: $perPage) {
        pageInfo {
            hasNextPage
        }
        mediaList (userName: $userName, type: $type) {
            status
            media {
                title {
                    english
                    romaji
                }
                episodes
                chapters
                volumes
                isAdult
                genres
                description
                averageScore
                status
            }
        }
    }
}
"#;

const GENRE_COLLECTION_QUERY: &str = "query { GenreCollection }";

#[derive(Clone)]
pub struct AniListProvider {
    http_client: HttpClient,
    api_url: String,
    per_page: u32,
    cache: Cache,
    list_cache_ttl: u64,
}

impl AniListProvider {
    pub fn new(cache: Cache, config: &Config) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_url: config.anilist_api_url.clone(),
            per_page: config.anilist_per_page.max(1),
            cache,
            list_cache_ttl: config.media_list_cache_ttl,
        }
    }

    /// Variables for one page of the media list query
    fn page_variables(&self, username: &str, media_type: MediaType, page: u32) -> Value {
        json!({
            "page": page,
            "perPage": self.per_page,
            "userName": username,
            "type": media_type.as_api_str(),
        })
    }

    /// Posts a GraphQL query and unwraps the response envelope
    async fn post_query<T: DeserializeOwned>(&self, query: &str, variables: Value) -> AppResult<T> {
        let response = self
            .http_client
            .post(&self.api_url)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body = %body, "AniList request failed");

            return Err(if status == StatusCode::NOT_FOUND {
                AppError::NotFound(format!("AniList returned 404: {}", body))
            } else {
                AppError::ExternalApi(format!("AniList returned status {}: {}", status, body))
            });
        }

        let envelope: GraphQlResponse<T> = response.json().await?;
        into_data(envelope)
    }

    async fn fetch_page(
        &self,
        username: &str,
        media_type: MediaType,
        page: u32,
    ) -> AppResult<ApiPage> {
        let data: ApiPageData = self
            .post_query(
                MEDIA_LIST_QUERY,
                self.page_variables(username, media_type, page),
            )
            .await?;
        Ok(data.page)
    }

    /// Walks every page of a user's list
    async fn paginate(&self, username: &str, media_type: MediaType) -> AppResult<Vec<MediaEntry>> {
        let mut entries = Vec::new();
        let mut page = 1;

        loop {
            let result = self.fetch_page(username, media_type, page).await?;
            if result.media_list.is_empty() {
                break;
            }

            let has_next_page = result.page_info.map_or(true, |info| info.has_next_page);
            entries.extend(
                result
                    .media_list
                    .into_iter()
                    .map(|row| row.into_entry(media_type)),
            );

            tracing::debug!(page, fetched = entries.len(), "Fetched media list page");

            if !has_next_page {
                break;
            }
            page += 1;
        }

        Ok(entries)
    }
}

/// Extracts `data`, turning GraphQL `errors` into an [`AppError`]
fn into_data<T>(envelope: GraphQlResponse<T>) -> AppResult<T> {
    if !envelope.errors.is_empty() {
        return Err(graphql_error(&envelope.errors));
    }

    envelope
        .data
        .ok_or_else(|| AppError::ExternalApi("AniList response missing data".to_string()))
}

fn graphql_error(errors: &[GraphQlError]) -> AppError {
    let message = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");

    if errors.iter().any(|e| e.status == Some(404)) {
        AppError::NotFound(message)
    } else {
        AppError::ExternalApi(message)
    }
}

#[async_trait::async_trait]
impl CatalogProvider for AniListProvider {
    async fn fetch_media_list(
        &self,
        username: &str,
        media_type: MediaType,
    ) -> AppResult<Vec<MediaEntry>> {
        if username.trim().is_empty() {
            return Err(AppError::InvalidInput("Username cannot be empty".to_string()));
        }

        cached!(
            self.cache,
            CacheKey::MediaList {
                username: username.to_string(),
                media_type,
            },
            self.list_cache_ttl,
            async move {
                let entries = self.paginate(username, media_type).await?;

                tracing::info!(
                    username = %username,
                    media_type = %media_type,
                    entries = entries.len(),
                    provider = self.name(),
                    "Media list fetched"
                );

                Ok::<_, AppError>(entries)
            }
        )
    }

    async fn fetch_genre_collection(&self) -> AppResult<Vec<String>> {
        let data: ApiGenreCollection = self.post_query(GENRE_COLLECTION_QUERY, json!({})).await?;

        tracing::info!(
            genres = data.genres.len(),
            provider = self.name(),
            "Genre collection fetched"
        );

        Ok(data.genres)
    }

    fn name(&self) -> &'static str {
        "anilist"
    }
}
