use std::collections::HashSet;

use crate::models::MatchMode;

use super::filter::InvalidRequest;

/// Decides whether an entry's genres satisfy a genre request
///
/// Requested genres are lower-cased once at construction; entry genres are
/// lower-cased per comparison, so callers may pass mixed-case input on both
/// sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreMatcher {
    requested: HashSet<String>,
    mode: MatchMode,
}

impl GenreMatcher {
    /// Builds a matcher, rejecting a Partial request without exactly one term
    pub fn new<S: AsRef<str>>(requested: &[S], mode: MatchMode) -> Result<Self, InvalidRequest> {
        if mode == MatchMode::Partial && requested.len() != 1 {
            return Err(InvalidRequest::PartialGenreCount(requested.len()));
        }

        Ok(Self {
            requested: lowercase_set(requested),
            mode,
        })
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Returns true when the entry passes under this matcher's mode
    pub fn accepts<S: AsRef<str>>(&self, entry_genres: &[S]) -> bool {
        match self.mode {
            MatchMode::None => true,
            // Entry genres must equal the request, extra genres fail
            MatchMode::Strict => lowercase_set(entry_genres) == self.requested,
            MatchMode::Partial | MatchMode::Contains => {
                let entry = lowercase_set(entry_genres);
                self.requested.is_subset(&entry)
            }
        }
    }
}

/// One-shot form of [`GenreMatcher`]
pub fn matches<R, E>(
    requested: &[R],
    entry_genres: &[E],
    mode: MatchMode,
) -> Result<bool, InvalidRequest>
where
    R: AsRef<str>,
    E: AsRef<str>,
{
    Ok(GenreMatcher::new(requested, mode)?.accepts(entry_genres))
}

fn lowercase_set<S: AsRef<str>>(genres: &[S]) -> HashSet<String> {
    genres
        .iter()
        .map(|genre| genre.as_ref().trim().to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY: [&str; 0] = [];

    #[test]
    fn test_none_mode_always_matches() {
        assert!(matches(&["Action"], &["Romance"], MatchMode::None).unwrap());
        assert!(matches(&EMPTY, &EMPTY, MatchMode::None).unwrap());
        assert!(matches(&["Action", "Drama", "Horror"], &EMPTY, MatchMode::None).unwrap());
    }

    #[test]
    fn test_strict_exact_set_passes() {
        assert!(matches(&["Action", "Comedy"], &["Action", "Comedy"], MatchMode::Strict).unwrap());
    }

    #[test]
    fn test_strict_rejects_extra_entry_genre() {
        assert!(!matches(&["Action"], &["Action", "Comedy"], MatchMode::Strict).unwrap());
    }

    #[test]
    fn test_strict_rejects_missing_requested_genre() {
        assert!(!matches(&["Action", "Comedy"], &["Action"], MatchMode::Strict).unwrap());
    }

    #[test]
    fn test_strict_is_case_insensitive_and_order_free() {
        assert!(matches(
            &["slice of life", "COMEDY"],
            &["Comedy", "Slice of Life"],
            MatchMode::Strict
        )
        .unwrap());
    }

    #[test]
    fn test_strict_ignores_duplicates() {
        assert!(matches(&["Drama", "drama"], &["Drama"], MatchMode::Strict).unwrap());
    }

    #[test]
    fn test_strict_empty_request_only_matches_genreless_entry() {
        assert!(matches(&EMPTY, &EMPTY, MatchMode::Strict).unwrap());
        assert!(!matches(&EMPTY, &["Action"], MatchMode::Strict).unwrap());
    }

    #[test]
    fn test_partial_single_genre_present() {
        assert!(matches(&["Romance"], &["Romance"], MatchMode::Partial).unwrap());
        assert!(matches(&["romance"], &["Drama", "Romance"], MatchMode::Partial).unwrap());
    }

    #[test]
    fn test_partial_single_genre_absent() {
        assert!(!matches(&["Romance"], &["Drama"], MatchMode::Partial).unwrap());
    }

    #[test]
    fn test_partial_rejects_multiple_terms() {
        let result = matches(&["Romance", "Drama"], &["Romance"], MatchMode::Partial);
        assert_eq!(result, Err(InvalidRequest::PartialGenreCount(2)));
    }

    #[test]
    fn test_partial_rejects_empty_request() {
        let result = matches(&EMPTY, &["Romance"], MatchMode::Partial);
        assert_eq!(result, Err(InvalidRequest::PartialGenreCount(0)));
    }

    #[test]
    fn test_contains_ignores_extra_genres() {
        assert!(matches(&["Action"], &["Action", "Comedy"], MatchMode::Contains).unwrap());
        let requested = ["Action", "Horror"];
        assert!(!matches(&requested, &["Action", "Comedy"], MatchMode::Contains).unwrap());
    }

    #[test]
    fn test_contains_empty_request_matches_everything() {
        assert!(matches(&EMPTY, &["Mecha"], MatchMode::Contains).unwrap());
    }

    #[test]
    fn test_matcher_reuse() {
        let matcher = GenreMatcher::new(&["Sci-Fi".to_string()], MatchMode::Partial).unwrap();
        assert_eq!(matcher.mode(), MatchMode::Partial);
        assert!(matcher.accepts(&["sci-fi", "Mecha"]));
        assert!(!matcher.accepts(&["Mecha"]));
    }
}
