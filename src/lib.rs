//! Display and search normalization for AniList media records.
//!
//! The catalog API hands back deeply optional records: titles in two or
//! three scripts, episode counts that may only exist as "the episode
//! airing next", partial dates, user tracking data that is simply absent
//! for untracked shows. This crate turns those records into values a UI
//! or an episode-source matcher can use directly, without any of the
//! fetching, caching or rendering around them.
//!
//! - [`models`] — the record shapes and the serde decode boundary.
//! - [`display`] — pure derivation functions: canonical titles and
//!   search variants, episode/progress arithmetic, status and format
//!   labels, airing countdowns, date humanization, and relation-graph
//!   filtering.

pub mod constants;
pub mod display;
pub mod models;

pub use display::time::Countdown;
pub use models::RecordError;
pub use models::list_entry::ListEntry;
pub use models::media::Media;
