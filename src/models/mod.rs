//! Record shapes for AniList media payloads and the decode boundary.
//!
//! The display layer never performs I/O; records enter through serde
//! (usually via [`Media::from_json`](media::Media::from_json)) and are
//! treated as immutable from then on.

pub mod list_entry;
pub mod media;

use thiserror::Error;

/// Failure to decode an incoming media payload.
///
/// The one way records can fail to enter the system. Everything past the
/// decode boundary is total: missing fields become defined defaults, not
/// errors.
#[derive(Debug, Error)]
#[error("malformed media record: {0}")]
pub struct RecordError(#[from] serde_json::Error);
