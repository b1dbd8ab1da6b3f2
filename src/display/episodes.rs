//! Episode counts and user-progress accessors.
//!
//! The sentinel values here (`-1`, `0`, empty string, "?") are per-field
//! contracts that existing callers rely on; they are deliberately not
//! unified into one "no value" convention.

use crate::models::media::Media;

/// Declared episode count: the record's own total, or one less than the
/// next airing episode while the total is still undeclared.
#[must_use]
pub fn total_episodes(media: &Media) -> Option<i32> {
    media.episodes.or_else(|| {
        media
            .next_airing_episode
            .as_ref()
            .map(|next| next.episode - 1)
    })
}

/// Episodes actually out now. Unlike [`total_episodes`] this prefers the
/// airing-derived count even when a declared total exists: a releasing
/// 24-episode show with episode 10 airing next has 9 episodes available.
#[must_use]
pub fn available_episodes(media: &Media) -> Option<i32> {
    media
        .next_airing_episode
        .as_ref()
        .map(|next| next.episode - 1)
        .or(media.episodes)
}

/// Community mean score as a string, "?" when the catalog has none.
#[must_use]
pub fn mean_score_display(media: &Media) -> String {
    media
        .mean_score
        .map_or_else(|| "?".to_string(), |score| score.to_string())
}

/// The viewer's list status, empty string when the show is untracked.
#[must_use]
pub fn user_status(media: &Media) -> String {
    media
        .media_list_entry
        .as_ref()
        .and_then(|entry| entry.status.clone())
        .unwrap_or_default()
}

/// The viewer's score, `-1` when the show is untracked or unscored.
#[must_use]
pub fn user_score(media: &Media) -> i32 {
    media
        .media_list_entry
        .as_ref()
        .and_then(|entry| entry.score)
        .unwrap_or(-1)
}

/// Episodes the viewer has watched, `0` when the show is untracked.
#[must_use]
pub fn user_progress(media: &Media) -> i32 {
    media
        .media_list_entry
        .as_ref()
        .and_then(|entry| entry.progress)
        .unwrap_or(0)
}

/// The viewer's list-entry id, `-1` when the show is untracked.
#[must_use]
pub fn user_list_entry_id(media: &Media) -> i32 {
    media
        .media_list_entry
        .as_ref()
        .map_or(-1, |entry| entry.id)
}
