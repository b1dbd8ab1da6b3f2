/// Month names indexed by month number minus one.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Status labels that mean a show cannot be watched yet (or anymore).
///
/// Availability is defined on the human-readable label, not the raw enum,
/// so this set must agree with `display::status::status_label` exactly.
pub const UNAVAILABLE_STATUS_LABELS: &[&str] = &["Unreleased", "Cancelled", "Discontinued"];

/// Base URL for embedded YouTube trailers.
pub const YOUTUBE_EMBED_BASE: &str = "https://www.youtube.com/embed/";
