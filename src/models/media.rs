use serde::{Deserialize, Serialize};

/// English and romaji titles of a media entry
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MediaTitle {
    pub english: Option<String>,
    pub romaji: Option<String>,
}

impl MediaTitle {
    /// Preferred display title, English first
    pub fn display(&self) -> &str {
        self.english
            .as_deref()
            .or(self.romaji.as_deref())
            .unwrap_or("<untitled>")
    }
}

/// Format-specific counts of a media entry
///
/// Series are counted in episodes, publications in chapters and volumes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MediaKind {
    Series {
        episodes: Option<u32>,
    },
    Publication {
        chapters: Option<u32>,
        volumes: Option<u32>,
    },
}

impl MediaKind {
    /// The count that episode/chapter bounds are checked against
    ///
    /// Volumes are never bound-checked, chapters are the canonical unit.
    pub fn bounded_count(&self) -> Option<u32> {
        match self {
            MediaKind::Series { episodes } => *episodes,
            MediaKind::Publication { chapters, .. } => *chapters,
        }
    }
}

/// Status of an entry on the user's list
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListStatus {
    Current,
    Planning,
    Completed,
    Dropped,
    Paused,
    Repeating,
}

/// Release status of the media itself
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaStatus {
    Finished,
    Releasing,
    NotYetReleased,
    Cancelled,
    Hiatus,
}

/// One media record from a user's list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediaEntry {
    pub title: MediaTitle,
    #[serde(flatten)]
    pub kind: MediaKind,
    pub is_adult: bool,
    pub genres: Vec<String>,
    pub description: Option<String>,
    /// Average score in [0, 100]
    pub score: u8,
    pub list_status: Option<ListStatus>,
    pub media_status: Option<MediaStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefers_english() {
        let title = MediaTitle {
            english: Some("Attack on Titan".to_string()),
            romaji: Some("Shingeki no Kyojin".to_string()),
        };
        assert_eq!(title.display(), "Attack on Titan");
    }

    #[test]
    fn test_display_falls_back_to_romaji() {
        let title = MediaTitle {
            english: None,
            romaji: Some("Yokohama Kaidashi Kikou".to_string()),
        };
        assert_eq!(title.display(), "Yokohama Kaidashi Kikou");
    }

    #[test]
    fn test_bounded_count_uses_chapters_for_publications() {
        let kind = MediaKind::Publication {
            chapters: Some(139),
            volumes: Some(34),
        };
        assert_eq!(kind.bounded_count(), Some(139));

        let kind = MediaKind::Publication {
            chapters: None,
            volumes: Some(34),
        };
        assert_eq!(kind.bounded_count(), None);
    }

    #[test]
    fn test_media_entry_serializes_kind_inline() {
        let entry = MediaEntry {
            title: MediaTitle::default(),
            kind: MediaKind::Series { episodes: Some(12) },
            is_adult: false,
            genres: vec!["Comedy".to_string()],
            description: None,
            score: 80,
            list_status: Some(ListStatus::Planning),
            media_status: Some(MediaStatus::Finished),
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["kind"], "series");
        assert_eq!(json["episodes"], 12);
        assert_eq!(json["list_status"], "PLANNING");
        assert_eq!(json["media_status"], "FINISHED");
    }
}
