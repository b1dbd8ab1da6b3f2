//! Human-readable status/format labels and availability.

use crate::constants::UNAVAILABLE_STATUS_LABELS;
use crate::models::media::{Media, MediaFormat, MediaStatus};

/// Human-readable release status. Absent or unrecognized statuses render
/// as "?".
#[must_use]
pub const fn status_label(status: Option<MediaStatus>) -> &'static str {
    match status {
        Some(MediaStatus::Finished) => "Finished",
        Some(MediaStatus::Releasing) => "Releasing",
        Some(MediaStatus::NotYetReleased) => "Unreleased",
        Some(MediaStatus::Cancelled) => "Cancelled",
        Some(MediaStatus::Hiatus) => "Discontinued",
        Some(MediaStatus::Unknown) | None => "?",
    }
}

/// Human-readable media format. Absent or unrecognized formats render
/// as "?".
#[must_use]
pub const fn format_label(format: Option<MediaFormat>) -> &'static str {
    match format {
        Some(MediaFormat::Tv) => "TV Show",
        Some(MediaFormat::TvShort) => "TV Short",
        Some(MediaFormat::Movie) => "Movie",
        Some(MediaFormat::Special) => "Special",
        Some(MediaFormat::Ova) => "OVA",
        Some(MediaFormat::Ona) => "ONA",
        Some(MediaFormat::Music) => "Music",
        Some(MediaFormat::Unknown) | None => "?",
    }
}

/// Whether the show can be watched now.
///
/// False when the status is absent; otherwise true unless the status
/// *label* falls in [`UNAVAILABLE_STATUS_LABELS`]. The check runs on the
/// label, not the raw enum, so it can never drift from what the user
/// sees.
#[must_use]
pub fn is_available(media: &Media) -> bool {
    media
        .status
        .is_some_and(|status| !UNAVAILABLE_STATUS_LABELS.contains(&status_label(Some(status))))
}

/// Season year as a string, "?" when unknown.
#[must_use]
pub fn season_year_display(media: &Media) -> String {
    media
        .season_year
        .map_or_else(|| "?".to_string(), |year| year.to_string())
}
