//! Canonical titles and search-variant generation.

use crate::constants::YOUTUBE_EMBED_BASE;
use crate::models::media::Media;

/// Display title: english when present, else romaji, else empty.
#[must_use]
pub fn canonical_title(media: &Media) -> String {
    media.title.as_ref().map_or_else(String::new, |title| {
        title
            .english
            .clone()
            .or_else(|| title.romaji.clone())
            .unwrap_or_default()
    })
}

/// Romaji, english, then synonyms, in that order.
///
/// Empty when the record has no title object at all, even if synonyms
/// exist (a titleless record is not worth matching against).
#[must_use]
pub fn titles_and_synonyms(media: &Media) -> Vec<String> {
    let Some(title) = &media.title else {
        return Vec::new();
    };

    let mut titles = Vec::new();
    if let Some(romaji) = &title.romaji {
        titles.push(romaji.clone());
    }
    if let Some(english) = &title.english {
        titles.push(english.clone());
    }
    if let Some(synonyms) = &media.synonyms {
        titles.extend(synonyms.iter().cloned());
    }
    titles
}

/// [`search_title_variants_with`] without a custom-title override.
#[must_use]
pub fn search_title_variants(media: &Media) -> Vec<String> {
    search_title_variants_with(media, |_| None)
}

/// Title variants for fuzzy matching against loosely-named episode
/// sources.
///
/// Starts from [`titles_and_synonyms`], optionally prepends a custom
/// title for this record id, then expands: each title containing
/// "Season ", "Season " + "Part ", "Part " or ":" contributes a variant
/// with the first occurrence of those markers removed. Generated
/// variants are expanded in turn, so co-occurring markers multiply out.
/// Duplicates are kept on purpose; downstream matching tolerates them
/// and over-generation beats a missed match. Termination is guaranteed
/// because every generated variant is strictly shorter than its source.
#[must_use]
pub fn search_title_variants_with<F>(media: &Media, custom_title: F) -> Vec<String>
where
    F: FnOnce(i32) -> Option<String>,
{
    let mut titles = titles_and_synonyms(media);
    if let Some(custom) = custom_title(media.id) {
        titles.insert(0, custom);
    }

    let mut index = 0;
    while index < titles.len() {
        let title = titles[index].clone();
        if title.contains("Season ") {
            titles.push(title.replacen("Season ", "", 1));
        }
        if title.contains("Season ") && title.contains("Part ") {
            titles.push(title.replacen("Season ", "", 1).replacen("Part ", "", 1));
        }
        if title.contains("Part ") {
            titles.push(title.replacen("Part ", "", 1));
        }
        if title.contains(':') {
            titles.push(title.replacen(":", "", 1));
        }
        index += 1;
    }
    titles
}

/// Embed URL for the trailer, empty when there is none or it is not
/// hosted on YouTube.
#[must_use]
pub fn trailer_url(media: &Media) -> String {
    match &media.trailer {
        Some(trailer) if trailer.site.as_deref() == Some("youtube") => trailer
            .id
            .as_ref()
            .map_or_else(String::new, |id| format!("{YOUTUBE_EMBED_BASE}{id}")),
        _ => String::new(),
    }
}
