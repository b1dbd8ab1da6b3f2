//! Related-works filtering and labeling.

use crate::models::media::{MediaRelationEdge, MediaRelationType, MediaRelations, MediaType};

/// Edges whose related work is itself an anime, in their original order.
///
/// Returns a borrowed view; the input graph is never touched.
#[must_use]
pub fn anime_relation_edges(relations: &MediaRelations) -> Vec<&MediaRelationEdge> {
    relations
        .edges
        .iter()
        .filter(|edge| edge.node.media_type == Some(MediaType::Anime))
        .collect()
}

/// Human label for a relation type.
///
/// The match is exhaustive over a closed enum: adding a relation type
/// without a label is a compile error, never a silent fallback.
#[must_use]
pub const fn relation_type_label(relation_type: MediaRelationType) -> &'static str {
    match relation_type {
        MediaRelationType::Adaptation => "Adaptation",
        MediaRelationType::Prequel => "Prequel",
        MediaRelationType::Sequel => "Sequel",
        MediaRelationType::Parent => "Parent Story",
        MediaRelationType::SideStory => "Side Story",
        MediaRelationType::Character => "Character",
        MediaRelationType::Summary => "Summary",
        MediaRelationType::Alternative => "Alternative Version",
        MediaRelationType::SpinOff => "Spin-off",
        MediaRelationType::Other => "Other",
    }
}
