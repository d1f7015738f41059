//! The three availability operations: single-slot validation, slot
//! enumeration for one date, and date-range availability.
//!
//! All three share one weekday-window lookup and one half-open overlap
//! predicate, so a proposed booking that passes [`check_time_slot_availability`]
//! is exactly a slot that [`get_available_time_slots`] would flag available.
//! The functions are deterministic and advisory: the booking-creation handler
//! must still re-validate at write time under a transaction or unique
//! constraint to close the check-then-commit race.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Timelike, Utc};

use crate::overlap::{intervals_overlap, minutes_from_midnight};
use crate::types::{AvailabilityCheckResult, Booking, RecurringAvailabilityWindow, TimeSlot};

/// Cadence at which candidate slot starts are generated within a window.
///
/// A policy constant, deliberately not derived from the session duration: a
/// 90-minute session still advances candidates by 30 minutes, so sessions can
/// be offered starting at :00/:30 regardless of length. Candidates may
/// therefore overlap each other; the caller presents only available ones.
pub const SLOT_INTERVAL_MINUTES: i64 = 30;

const REASON_NO_WINDOW: &str = "Tutor is not available on this day";
const REASON_OUTSIDE_WINDOW: &str = "Time slot is outside the tutor's availability hours";
const REASON_CONFLICT: &str = "Time slot conflicts with an existing booking";

/// First active window for `(tutor_id, day_of_week)`.
///
/// Creation-time validation rejects a second active window on the same day
/// for a tutor, so first-match is total in practice.
fn active_window_for<'a>(
    windows: &'a [RecurringAvailabilityWindow],
    tutor_id: &str,
    day_of_week: u8,
) -> Option<&'a RecurringAvailabilityWindow> {
    windows
        .iter()
        .find(|w| w.is_active && w.tutor_id == tutor_id && w.day_of_week == day_of_week)
}

/// First active booking of `tutor_id` overlapping `[start, end)`.
fn first_conflict<'a>(
    bookings: &'a [Booking],
    tutor_id: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Option<&'a Booking> {
    bookings
        .iter()
        .filter(|b| b.tutor_id == tutor_id && b.status.blocks_slot())
        .find(|b| intervals_overlap(start, end, b.scheduled_at, b.end()))
}

/// Validate a single proposed booking against the tutor's recurring windows
/// and existing bookings.
///
/// The proposed interval is `[scheduled_at, scheduled_at + duration_minutes)`.
/// Unavailability is an ordinary result, never an error:
///
/// - no active window on the proposal's UTC weekday → unavailable;
/// - the proposal straddles or spills outside the window, even partially →
///   unavailable (strict containment in window minutes);
/// - the first active booking overlapping the proposal → unavailable, with
///   that booking attached as `conflicting_booking`.
///
/// Exact adjacency to an existing booking is not a conflict (half-open
/// intervals). Bookings of other tutors and cancelled/refunded bookings never
/// conflict.
pub fn check_time_slot_availability(
    scheduled_at: DateTime<Utc>,
    duration_minutes: u32,
    windows: &[RecurringAvailabilityWindow],
    bookings: &[Booking],
    tutor_id: &str,
) -> AvailabilityCheckResult {
    let day_of_week = scheduled_at.weekday().num_days_from_sunday() as u8;

    let window = match active_window_for(windows, tutor_id, day_of_week) {
        Some(w) => w,
        None => return AvailabilityCheckResult::unavailable(REASON_NO_WINDOW),
    };

    // Strict containment in the window, compared in minutes since midnight.
    let window_start = minutes_from_midnight(&window.start_time);
    let window_end = minutes_from_midnight(&window.end_time);
    let booking_start = i64::from(scheduled_at.hour()) * 60 + i64::from(scheduled_at.minute());
    let booking_end = booking_start + i64::from(duration_minutes);

    if booking_start < window_start || booking_end > window_end {
        return AvailabilityCheckResult::unavailable(REASON_OUTSIDE_WINDOW);
    }

    let end = scheduled_at + Duration::minutes(i64::from(duration_minutes));
    match first_conflict(bookings, tutor_id, scheduled_at, end) {
        Some(conflict) => AvailabilityCheckResult::conflict(REASON_CONFLICT, conflict.clone()),
        None => AvailabilityCheckResult::available(),
    }
}

/// Enumerate all candidate slots of `duration_minutes` for one UTC calendar
/// date.
///
/// Candidates start at [`SLOT_INTERVAL_MINUTES`] cadence from the window
/// start and are generated while `start + duration` still fits within the
/// window (boundary inclusive — a slot may end exactly at the window end).
/// Every candidate in range is returned, flagged `available` or not; nothing
/// is filtered out. A day with no active window yields an empty list, which
/// is a valid result, not an error.
pub fn get_available_time_slots(
    date: NaiveDate,
    duration_minutes: u32,
    windows: &[RecurringAvailabilityWindow],
    bookings: &[Booking],
    tutor_id: &str,
) -> Vec<TimeSlot> {
    let day_of_week = date.weekday().num_days_from_sunday() as u8;

    let window = match active_window_for(windows, tutor_id, day_of_week) {
        Some(w) => w,
        None => return Vec::new(),
    };

    let window_start = minutes_from_midnight(&window.start_time);
    let window_end = minutes_from_midnight(&window.end_time);
    let duration = i64::from(duration_minutes);
    let midnight = date.and_time(NaiveTime::MIN).and_utc();

    let mut slots = Vec::new();
    let mut cursor = window_start;
    while cursor + duration <= window_end {
        let start = midnight + Duration::minutes(cursor);
        let end = start + Duration::minutes(duration);

        let slot = match first_conflict(bookings, tutor_id, start, end) {
            Some(_) => TimeSlot {
                start,
                end,
                available: false,
                reason: Some(REASON_CONFLICT.to_string()),
            },
            None => TimeSlot {
                start,
                end,
                available: true,
                reason: None,
            },
        };
        slots.push(slot);

        cursor += SLOT_INTERVAL_MINUTES;
    }

    slots
}

/// Enumerate the UTC calendar dates in `[start_date, end_date]` (inclusive)
/// that have at least one available slot of `duration_minutes`.
///
/// Linear in range length × slots per day × bookings per day — fine for the
/// days-to-weeks ranges a booking calendar asks for.
pub fn get_available_dates(
    start_date: NaiveDate,
    end_date: NaiveDate,
    windows: &[RecurringAvailabilityWindow],
    bookings: &[Booking],
    tutor_id: &str,
    duration_minutes: u32,
) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut day = start_date;
    while day <= end_date {
        let slots = get_available_time_slots(day, duration_minutes, windows, bookings, tutor_id);
        if slots.iter().any(|s| s.available) {
            dates.push(day);
        }
        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    dates
}
