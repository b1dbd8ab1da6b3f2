use serde::{Deserialize, Serialize};

use crate::models::RecordError;

/// One catalog entry for a show, as returned by the AniList GraphQL API.
///
/// Every field except `id` can be absent in a real payload, so everything
/// is optional and the derivation functions in [`crate::display`] define
/// the fallback for each. Records are read-only inputs; nothing in this
/// crate mutates one after deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Media {
    pub id: i32,
    pub title: Option<MediaTitle>,
    pub synonyms: Option<Vec<String>>,
    pub status: Option<MediaStatus>,
    pub format: Option<MediaFormat>,
    pub episodes: Option<i32>,
    pub next_airing_episode: Option<NextAiringEpisode>,
    pub mean_score: Option<i32>,
    pub media_list_entry: Option<MediaListEntry>,
    pub start_date: Option<FuzzyDate>,
    pub trailer: Option<Trailer>,
    pub relations: Option<MediaRelations>,
    /// Distinguishes ANIME from MANGA; mainly relevant on relation nodes.
    #[serde(rename = "type")]
    pub media_type: Option<MediaType>,
    pub description: Option<String>,
    pub season: Option<String>,
    pub season_year: Option<i32>,
    pub cover_image: Option<CoverImage>,
    pub banner_image: Option<String>,
}

impl Media {
    /// Decodes a single media record from its JSON representation.
    pub fn from_json(payload: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(payload)?)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaTitle {
    pub romaji: Option<String>,
    pub english: Option<String>,
    pub native: Option<String>,
}

/// Airing information for a show that is still releasing.
///
/// When present, the show has exactly `episode - 1` episodes out now.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextAiringEpisode {
    pub episode: i32,
    pub time_until_airing: i64,
    /// Unix timestamp of the airing moment. Older cached payloads may
    /// lack it, so it stays optional.
    #[serde(default)]
    pub airing_at: Option<i64>,
}

/// The viewer's tracking entry for a show. Absent entirely when the show
/// is not on the viewer's list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaListEntry {
    pub id: i32,
    pub status: Option<String>,
    pub progress: Option<i32>,
    pub score: Option<i32>,
}

/// A calendar date where every component may be unknown independently.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzyDate {
    pub year: Option<i32>,
    pub month: Option<i32>,
    pub day: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Trailer {
    pub id: Option<String>,
    pub site: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoverImage {
    pub extra_large: Option<String>,
    pub large: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaRelations {
    pub edges: Vec<MediaRelationEdge>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaRelationEdge {
    pub relation_type: MediaRelationType,
    pub node: Media,
}

/// Release status as reported by the catalog.
///
/// `Unknown` absorbs any status string the API adds later; the display
/// layer renders it as "?" like an absent status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaStatus {
    Finished,
    Releasing,
    NotYetReleased,
    Cancelled,
    Hiatus,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaFormat {
    Tv,
    TvShort,
    Movie,
    Special,
    Ova,
    Ona,
    Music,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaType {
    Anime,
    Manga,
}

/// How a related work connects to the one holding the edge.
///
/// Deliberately closed: a relation type outside this set is a decode
/// failure, not something to paper over with a fallback label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaRelationType {
    Adaptation,
    Prequel,
    Sequel,
    Parent,
    SideStory,
    Character,
    Summary,
    Alternative,
    SpinOff,
    Other,
}
