pub mod filter;
pub mod genre_matcher;
pub mod providers;
pub mod recommendations;
pub mod validation;
pub mod vocabulary;

pub use filter::{recommend, InvalidRequest};
pub use genre_matcher::{matches, GenreMatcher};
pub use providers::{AniListProvider, CatalogProvider};
pub use vocabulary::{GenreVocabulary, VocabularySnapshot};
