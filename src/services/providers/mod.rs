//! Catalog data provider abstraction
//!
//! A provider turns a username and media type into a fully-paginated list of
//! [`MediaEntry`] records, and supplies the catalog's genre vocabulary.

use crate::{
    error::AppResult,
    models::{MediaEntry, MediaType},
};

pub mod anilist;

pub use anilist::AniListProvider;

/// Trait for media catalog providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetch every entry on a user's list of the given media type
    async fn fetch_media_list(
        &self,
        username: &str,
        media_type: MediaType,
    ) -> AppResult<Vec<MediaEntry>>;

    /// Fetch the names of every genre the catalog knows
    async fn fetch_genre_collection(&self) -> AppResult<Vec<String>>;

    /// Provider name for logging
    fn name(&self) -> &'static str;
}
