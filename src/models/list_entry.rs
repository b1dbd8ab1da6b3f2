use serde::{Deserialize, Serialize};

use crate::models::RecordError;
use crate::models::media::Media;

/// A media record viewed through the user's list.
///
/// Search and trending results arrive as bare [`Media`] values; list
/// queries arrive with tracking data attached. Both are carried in this
/// shape so callers can treat them uniformly, with `None` tracking
/// fields meaning "not on the list".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEntry {
    pub id: Option<i32>,
    pub media_id: Option<i32>,
    pub progress: Option<i32>,
    pub media: Media,
}

impl ListEntry {
    /// Wraps an untracked media record.
    #[must_use]
    pub const fn from_media(media: Media) -> Self {
        Self {
            id: None,
            media_id: None,
            progress: None,
            media,
        }
    }

    /// Wraps a page of search results as untracked entries.
    #[must_use]
    pub fn from_page(media: Vec<Media>) -> Vec<Self> {
        media.into_iter().map(Self::from_media).collect()
    }

    /// Decodes a JSON array of media records into untracked entries.
    pub fn entries_from_page_json(payload: &str) -> Result<Vec<Self>, RecordError> {
        let media: Vec<Media> = serde_json::from_str(payload)?;
        Ok(Self::from_page(media))
    }

    /// Wraps a record carrying its own tracking entry, lifting the entry
    /// id and progress so list views need not reach into the record.
    #[must_use]
    pub fn from_tracked(media: Media) -> Self {
        let entry = media.media_list_entry.as_ref();
        Self {
            id: entry.map(|entry| entry.id),
            media_id: Some(media.id),
            progress: entry.and_then(|entry| entry.progress),
            media,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::media::MediaListEntry;

    #[test]
    fn page_entries_are_untracked() {
        let page = vec![
            Media {
                id: 1,
                ..Media::default()
            },
            Media {
                id: 2,
                ..Media::default()
            },
        ];
        let entries = ListEntry::from_page(page);
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|entry| entry.id.is_none()));
        assert!(entries.iter().all(|entry| entry.progress.is_none()));
        assert_eq!(entries[1].media.id, 2);
    }

    #[test]
    fn tracked_entry_lifts_list_fields() {
        let media = Media {
            id: 7,
            media_list_entry: Some(MediaListEntry {
                id: 99,
                progress: Some(4),
                ..MediaListEntry::default()
            }),
            ..Media::default()
        };
        let entry = ListEntry::from_tracked(media);
        assert_eq!(entry.id, Some(99));
        assert_eq!(entry.media_id, Some(7));
        assert_eq!(entry.progress, Some(4));
    }

    #[test]
    fn page_json_decodes_to_untracked_entries() {
        let entries = ListEntry::entries_from_page_json(
            r#"[{"id": 1, "title": {"romaji": "A"}}, {"id": 2}]"#,
        )
        .unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|entry| entry.id.is_none()));
        assert_eq!(entries[0].media.id, 1);

        assert!(ListEntry::entries_from_page_json("not json").is_err());
    }

    #[test]
    fn tracked_entry_without_list_data_stays_bare() {
        let entry = ListEntry::from_tracked(Media {
            id: 7,
            ..Media::default()
        });
        assert_eq!(entry.id, None);
        assert_eq!(entry.media_id, Some(7));
        assert_eq!(entry.progress, None);
    }
}
