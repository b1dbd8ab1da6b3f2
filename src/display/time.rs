//! Countdown and air-date normalization.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

use crate::constants::MONTH_NAMES;
use crate::models::media::{FuzzyDate, Media};

/// A duration broken down for display.
///
/// The decomposition is pure integer arithmetic, so reassembly is exact:
///
/// ```
/// use anilens::display::time::Countdown;
///
/// let c = Countdown::from_seconds(90_061);
/// assert_eq!((c.days, c.hours, c.minutes, c.seconds), (1, 1, 1, 1));
/// assert_eq!(c.days * 86_400 + c.hours * 3_600 + c.minutes * 60 + c.seconds, 90_061);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Countdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Countdown {
    /// Decomposes a duration in seconds into days, hours, minutes and
    /// seconds, truncating toward zero at each step.
    #[must_use]
    pub const fn from_seconds(total: u64) -> Self {
        let days = total / 86_400;
        let rest = total % 86_400;
        let hours = rest / 3_600;
        let rest = rest % 3_600;
        Self {
            days,
            hours,
            minutes: rest / 60,
            seconds: rest % 60,
        }
    }
}

/// Time remaining before the next episode airs, or `None` when the show
/// has no upcoming episode.
#[must_use]
pub fn time_until_airing(media: &Media) -> Option<Countdown> {
    let next = media.next_airing_episode.as_ref()?;
    let seconds = u64::try_from(next.time_until_airing).unwrap_or(0);
    Some(Countdown::from_seconds(seconds))
}

/// RFC 3339 rendering of the next airing moment, when the payload
/// carries the timestamp.
#[must_use]
pub fn next_airing_timestamp(media: &Media) -> Option<String> {
    let airing_at = media.next_airing_episode.as_ref()?.airing_at?;
    DateTime::<Utc>::from_timestamp(airing_at, 0).map(|moment| moment.to_rfc3339())
}

fn month_name(key: &str) -> Option<&'static str> {
    match key.parse::<usize>() {
        Ok(month @ 1..=12) => Some(MONTH_NAMES[month - 1]),
        _ => None,
    }
}

/// Reorders a "YYYY-MM-DD" air date into "D MonthName Y".
///
/// Both zero-padded and unpadded month/day components are accepted.
/// Inputs with fewer than three dash-separated components produce a
/// degenerate string with the missing pieces empty (and the anomaly
/// logged) rather than an error; callers wanting strict dates must
/// validate upstream. An unresolvable month renders as "?", while a
/// non-numeric day component passes through verbatim (only numeric days
/// get their zero padding stripped).
#[must_use]
pub fn parse_air_date(airdate: &str) -> String {
    let mut parts = airdate.split('-');
    let year = parts.next().unwrap_or_default();
    let month = parts.next();
    let day = parts.next();

    if month.is_none() || day.is_none() {
        warn!(airdate, "air date is not in YYYY-MM-DD form");
    }

    let month_label = month.and_then(month_name).unwrap_or("?");
    let day_label = day.map_or_else(String::new, |raw| {
        raw.parse::<u32>()
            .map_or_else(|_| raw.to_string(), |number| number.to_string())
    });

    format!("{day_label} {month_label} {year}")
}

/// A [`FuzzyDate`] with its month replaced by a name, ready for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedStartDate {
    pub year: Option<i32>,
    pub month: Option<String>,
    pub day: Option<i32>,
}

/// Replaces the month of a partial date with its name. Absent components
/// stay absent; they are never defaulted.
#[must_use]
pub fn parse_start_date(date: &FuzzyDate) -> ParsedStartDate {
    ParsedStartDate {
        year: date.year,
        month: date
            .month
            .and_then(|month| month_name(&month.to_string()))
            .map(str::to_string),
        day: date.day,
    }
}

/// Whether the record has a start date with at least one known component.
/// A zero component counts as unknown, the same as an absent one.
#[must_use]
pub fn has_start_date(media: &Media) -> bool {
    media.start_date.is_some_and(|date| {
        [date.year, date.month, date.day]
            .into_iter()
            .any(|component| component.is_some_and(|value| value != 0))
    })
}

/// Playback-clock rendering: "MM:SS" under an hour, "HH:MM:SS" above.
#[must_use]
pub fn format_clock(total_seconds: u64) -> String {
    let seconds = total_seconds % 60;
    let minutes = (total_seconds / 60) % 60;
    let hours = total_seconds / 3_600;
    if hours == 0 {
        format!("{minutes:02}:{seconds:02}")
    } else {
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    }
}
