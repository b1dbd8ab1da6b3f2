//! End-to-end derivation over realistic catalog payloads: decode a
//! record the way the API ships it, then check every derived value the
//! presentation layer would ask for.

use anilens::display::{episodes, relations, status, text, time, titles};
use anilens::models::media::MediaRelationType;
use anilens::{ListEntry, Media};

const FINISHED_SHOW: &str = r#"{
    "id": 16498,
    "title": {
        "romaji": "Shingeki no Kyojin",
        "english": "Attack on Titan",
        "native": "進撃の巨人"
    },
    "synonyms": ["AoT", "Attack on Titan Season 1"],
    "status": "FINISHED",
    "format": "TV",
    "episodes": 25,
    "meanScore": 84,
    "seasonYear": 2013,
    "description": "<br>Humanity lives behind walls.",
    "startDate": {"year": 2013, "month": 4, "day": 7},
    "trailer": {"id": "KVV9qH2eWHA", "site": "youtube"},
    "mediaListEntry": {"id": 777, "status": "COMPLETED", "progress": 25, "score": 90},
    "type": "ANIME",
    "relations": {
        "edges": [
            {"relationType": "ADAPTATION", "node": {"id": 53390, "type": "MANGA"}},
            {
                "relationType": "SEQUEL",
                "node": {
                    "id": 20958,
                    "type": "ANIME",
                    "title": {"romaji": "Shingeki no Kyojin Season 2"}
                }
            }
        ]
    }
}"#;

const AIRING_SHOW: &str = r#"{
    "id": 163134,
    "title": {"romaji": "Sousou no Frieren"},
    "status": "RELEASING",
    "format": "TV",
    "episodes": 28,
    "nextAiringEpisode": {
        "episode": 10,
        "timeUntilAiring": 93784,
        "airingAt": 1700000000
    }
}"#;

#[test]
fn finished_show_derivations() {
    let media = Media::from_json(FINISHED_SHOW).unwrap();

    assert_eq!(titles::canonical_title(&media), "Attack on Titan");
    assert_eq!(status::status_label(media.status), "Finished");
    assert_eq!(status::format_label(media.format), "TV Show");
    assert!(status::is_available(&media));
    assert_eq!(status::season_year_display(&media), "2013");

    assert_eq!(episodes::total_episodes(&media), Some(25));
    assert_eq!(episodes::available_episodes(&media), Some(25));
    assert_eq!(episodes::mean_score_display(&media), "84");
    assert_eq!(episodes::user_status(&media), "COMPLETED");
    assert_eq!(episodes::user_score(&media), 90);
    assert_eq!(episodes::user_progress(&media), 25);
    assert_eq!(episodes::user_list_entry_id(&media), 777);

    assert!(time::time_until_airing(&media).is_none());
    assert!(time::has_start_date(&media));
    let start = time::parse_start_date(&media.start_date.unwrap());
    assert_eq!(start.year, Some(2013));
    assert_eq!(start.month.as_deref(), Some("April"));
    assert_eq!(start.day, Some(7));

    assert_eq!(
        text::clean_description(media.description.as_deref()),
        "Humanity lives behind walls."
    );
    assert_eq!(
        titles::trailer_url(&media),
        "https://www.youtube.com/embed/KVV9qH2eWHA"
    );

    let relations_graph = media.relations.as_ref().unwrap();
    let anime_edges = relations::anime_relation_edges(relations_graph);
    assert_eq!(anime_edges.len(), 1);
    assert_eq!(anime_edges[0].node.id, 20958);
    assert_eq!(
        relations::relation_type_label(anime_edges[0].relation_type),
        "Sequel"
    );
    assert_eq!(anime_edges[0].relation_type, MediaRelationType::Sequel);
    assert_eq!(
        titles::canonical_title(&anime_edges[0].node),
        "Shingeki no Kyojin Season 2"
    );

    // The synonym carrying a "Season " marker must produce its stripped
    // variant alongside every original.
    let variants = titles::search_title_variants(&media);
    assert!(variants.contains(&"Shingeki no Kyojin".to_string()));
    assert!(variants.contains(&"Attack on Titan Season 1".to_string()));
    assert!(variants.contains(&"Attack on Titan 1".to_string()));
}

#[test]
fn airing_show_derivations() {
    let media = Media::from_json(AIRING_SHOW).unwrap();

    assert_eq!(titles::canonical_title(&media), "Sousou no Frieren");
    assert_eq!(status::status_label(media.status), "Releasing");
    assert!(status::is_available(&media));

    // Declared total wins for "total", airing info wins for "available".
    assert_eq!(episodes::total_episodes(&media), Some(28));
    assert_eq!(episodes::available_episodes(&media), Some(9));
    assert_eq!(episodes::mean_score_display(&media), "?");

    let countdown = time::time_until_airing(&media).unwrap();
    assert_eq!(
        (
            countdown.days,
            countdown.hours,
            countdown.minutes,
            countdown.seconds
        ),
        (1, 2, 3, 4)
    );
    assert_eq!(
        time::next_airing_timestamp(&media).as_deref(),
        Some("2023-11-14T22:13:20+00:00")
    );

    // Untracked record: per-field sentinels.
    assert_eq!(episodes::user_status(&media), "");
    assert_eq!(episodes::user_score(&media), -1);
    assert_eq!(episodes::user_progress(&media), 0);
    assert_eq!(episodes::user_list_entry_id(&media), -1);
}

#[test]
fn unreleased_show_is_not_available() {
    let media = Media::from_json(r#"{"id": 1, "status": "NOT_YET_RELEASED"}"#).unwrap();
    assert_eq!(status::status_label(media.status), "Unreleased");
    assert!(!status::is_available(&media));
}

#[test]
fn search_page_wraps_into_untracked_entries() {
    let entries = ListEntry::entries_from_page_json(
        r#"[
            {"id": 1, "title": {"romaji": "A"}},
            {"id": 2, "title": {"romaji": "B"}}
        ]"#,
    )
    .unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries[0].id.is_none());
    assert_eq!(titles::canonical_title(&entries[1].media), "B");
}
