//! Half-open interval overlap primitive shared by all three engine operations.
//!
//! Intervals are `[start, end)` — adjacent intervals touching at the boundary
//! do not overlap, so a booking may start exactly when another ends.

use chrono::{DateTime, Utc};

/// Whether a proposed interval `[new_start, new_end)` overlaps an existing
/// interval `[existing_start, existing_end)`.
///
/// Three-way test: partial overlap from the left, partial overlap from the
/// right, or the new interval fully containing the existing one. The case of
/// the existing interval fully containing the new one is already caught by
/// the first clause. Exact adjacency (`new_end == existing_start` or
/// `new_start == existing_end`) fails every clause and is not a conflict.
pub fn intervals_overlap(
    new_start: DateTime<Utc>,
    new_end: DateTime<Utc>,
    existing_start: DateTime<Utc>,
    existing_end: DateTime<Utc>,
) -> bool {
    (new_start >= existing_start && new_start < existing_end)
        || (new_end > existing_start && new_end <= existing_end)
        || (new_start <= existing_start && new_end >= existing_end)
}

/// Convert an `HH:MM` wall-clock string to minutes since midnight.
///
/// The engine assumes rows passed the creation-time validation in
/// [`crate::validate`]; malformed components fall back to zero rather than
/// erroring, which is unspecified-but-harmless behavior for rows that should
/// never reach this point.
pub(crate) fn minutes_from_midnight(hhmm: &str) -> i64 {
    let (hours, minutes) = hhmm.split_once(':').unwrap_or((hhmm, "0"));
    let hours: i64 = hours.parse().unwrap_or(0);
    let minutes: i64 = minutes.parse().unwrap_or(0);
    hours * 60 + minutes
}
