//! Creation-time validation for recurring availability windows.
//!
//! The engine assumes well-formed rows; this module is the guard that makes
//! that assumption hold. The CRUD handler calls [`validate_window`] before
//! inserting or updating a window and rejects the write on any error,
//! including a second active window on the same weekday — the engine's
//! first-match lookup relies on that single-window-per-day invariant.

use crate::error::{Result, WindowError};
use crate::types::RecurringAvailabilityWindow;

/// Strictly parse an `HH:MM` 24-hour wall-clock string to minutes since
/// midnight.
///
/// Exactly two colon-separated numeric components, hours 0–23, minutes 0–59.
pub fn parse_hhmm(time: &str) -> Result<u32> {
    let invalid = || WindowError::InvalidTime(time.to_string());

    let (hours, minutes) = time.split_once(':').ok_or_else(invalid)?;
    if hours.len() != 2 || minutes.len() != 2 {
        return Err(invalid());
    }
    let hours: u32 = hours.parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes.parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }
    Ok(hours * 60 + minutes)
}

/// Validate a window before insert/update.
///
/// `existing` is the tutor's other windows (the row being updated excluded).
/// Checks, in order: time shape, weekday range, start/end ordering, timezone
/// identifier, and the single-window-per-day invariant. Inactive candidates
/// skip the last check — deactivated rows may pile up on a day freely.
///
/// # Errors
/// Returns the first applicable [`WindowError`]; the CRUD handler surfaces
/// its message verbatim.
pub fn validate_window(
    candidate: &RecurringAvailabilityWindow,
    existing: &[RecurringAvailabilityWindow],
) -> Result<()> {
    let start = parse_hhmm(&candidate.start_time)?;
    let end = parse_hhmm(&candidate.end_time)?;

    if candidate.day_of_week > 6 {
        return Err(WindowError::InvalidDayOfWeek(candidate.day_of_week));
    }

    if end <= start {
        return Err(WindowError::EndNotAfterStart {
            start: candidate.start_time.clone(),
            end: candidate.end_time.clone(),
        });
    }

    // The timezone is informational (interval math is UTC-only) but must at
    // least name a real IANA zone.
    let _tz: chrono_tz::Tz = candidate
        .timezone
        .parse()
        .map_err(|_| WindowError::InvalidTimezone(candidate.timezone.clone()))?;

    if candidate.is_active {
        let day_taken = existing.iter().any(|w| {
            w.is_active
                && w.tutor_id == candidate.tutor_id
                && w.day_of_week == candidate.day_of_week
        });
        if day_taken {
            return Err(WindowError::DayAlreadyCovered(candidate.day_of_week));
        }
    }

    Ok(())
}
