//! Tests for single-slot booking validation.
//!
//! 2026-03-16 is a Monday (day_of_week 1), which most scenarios build on.

use chrono::{DateTime, TimeZone, Utc};
use slot_engine::{
    check_time_slot_availability, Booking, BookingStatus, RecurringAvailabilityWindow,
};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn window(tutor_id: &str, day_of_week: u8, start: &str, end: &str) -> RecurringAvailabilityWindow {
    RecurringAvailabilityWindow {
        tutor_id: tutor_id.to_string(),
        day_of_week,
        start_time: start.to_string(),
        end_time: end.to_string(),
        timezone: "UTC".to_string(),
        is_active: true,
    }
}

fn booking(
    tutor_id: &str,
    scheduled_at: DateTime<Utc>,
    duration_minutes: u32,
    status: BookingStatus,
) -> Booking {
    Booking {
        tutor_id: tutor_id.to_string(),
        student_id: "student-1".to_string(),
        scheduled_at,
        duration_minutes,
        status,
    }
}

fn monday_at(hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 16, hour, min, 0).unwrap()
}

// ── No window on the requested day ──────────────────────────────────────────

#[test]
fn no_window_on_day_is_unavailable() {
    // Tutor only works Tuesdays (day 2); proposal is for a Monday.
    let windows = vec![window("tutor-1", 2, "09:00", "17:00")];

    let result = check_time_slot_availability(monday_at(10, 0), 60, &windows, &[], "tutor-1");

    assert!(!result.available);
    assert_eq!(
        result.reason.as_deref(),
        Some("Tutor is not available on this day")
    );
    assert!(result.conflicting_booking.is_none());
}

#[test]
fn inactive_window_is_never_matched() {
    let mut w = window("tutor-1", 1, "09:00", "17:00");
    w.is_active = false;

    let result = check_time_slot_availability(monday_at(10, 0), 60, &[w], &[], "tutor-1");

    assert!(!result.available);
    assert_eq!(
        result.reason.as_deref(),
        Some("Tutor is not available on this day")
    );
}

#[test]
fn another_tutors_window_is_not_matched() {
    let windows = vec![window("tutor-2", 1, "09:00", "17:00")];

    let result = check_time_slot_availability(monday_at(10, 0), 60, &windows, &[], "tutor-1");

    assert!(!result.available);
}

// ── Window containment ──────────────────────────────────────────────────────

#[test]
fn booking_inside_window_is_available() {
    let windows = vec![window("tutor-1", 1, "09:00", "17:00")];

    let result = check_time_slot_availability(monday_at(10, 0), 60, &windows, &[], "tutor-1");

    assert!(result.available);
    assert!(result.reason.is_none());
    assert!(result.conflicting_booking.is_none());
}

#[test]
fn booking_before_window_start_is_rejected() {
    let windows = vec![window("tutor-1", 1, "09:00", "17:00")];

    let result = check_time_slot_availability(monday_at(8, 30), 60, &windows, &[], "tutor-1");

    assert!(!result.available);
    assert_eq!(
        result.reason.as_deref(),
        Some("Time slot is outside the tutor's availability hours")
    );
}

#[test]
fn booking_spilling_past_window_end_is_rejected() {
    let windows = vec![window("tutor-1", 1, "09:00", "17:00")];

    // 16:30 + 60 min = 17:30, past the 17:00 window end.
    let result = check_time_slot_availability(monday_at(16, 30), 60, &windows, &[], "tutor-1");

    assert!(!result.available);
    assert_eq!(
        result.reason.as_deref(),
        Some("Time slot is outside the tutor's availability hours")
    );
}

#[test]
fn booking_ending_exactly_at_window_end_is_allowed() {
    let windows = vec![window("tutor-1", 1, "09:00", "17:00")];

    // 16:00 + 60 min = 17:00 == window end — boundary inclusive.
    let result = check_time_slot_availability(monday_at(16, 0), 60, &windows, &[], "tutor-1");

    assert!(result.available);
}

#[test]
fn booking_starting_exactly_at_window_start_is_allowed() {
    let windows = vec![window("tutor-1", 1, "09:00", "17:00")];

    let result = check_time_slot_availability(monday_at(9, 0), 60, &windows, &[], "tutor-1");

    assert!(result.available);
}

#[test]
fn containment_is_checked_before_conflicts() {
    let windows = vec![window("tutor-1", 1, "09:00", "17:00")];
    // A booking outside the window would also overlap this proposal, but the
    // verdict must be the containment reason, not a conflict.
    let bookings = vec![booking(
        "tutor-1",
        monday_at(8, 0),
        120,
        BookingStatus::Confirmed,
    )];

    let result = check_time_slot_availability(monday_at(8, 30), 60, &windows, &bookings, "tutor-1");

    assert!(!result.available);
    assert_eq!(
        result.reason.as_deref(),
        Some("Time slot is outside the tutor's availability hours")
    );
    assert!(result.conflicting_booking.is_none());
}

// ── Conflict detection ──────────────────────────────────────────────────────

#[test]
fn overlapping_confirmed_booking_is_a_conflict() {
    // Window 09:00–17:00, confirmed booking 10:00–11:00,
    // proposal 10:30 for 30 minutes.
    let windows = vec![window("tutor-1", 1, "09:00", "17:00")];
    let existing = booking("tutor-1", monday_at(10, 0), 60, BookingStatus::Confirmed);

    let result =
        check_time_slot_availability(monday_at(10, 30), 30, &windows, &[existing.clone()], "tutor-1");

    assert!(!result.available);
    assert_eq!(
        result.reason.as_deref(),
        Some("Time slot conflicts with an existing booking")
    );
    assert_eq!(result.conflicting_booking, Some(existing));
}

#[test]
fn pending_booking_also_blocks() {
    let windows = vec![window("tutor-1", 1, "09:00", "17:00")];
    let bookings = vec![booking(
        "tutor-1",
        monday_at(10, 0),
        60,
        BookingStatus::Pending,
    )];

    let result = check_time_slot_availability(monday_at(10, 0), 60, &windows, &bookings, "tutor-1");

    assert!(!result.available);
}

#[test]
fn cancelled_and_refunded_bookings_never_conflict() {
    let windows = vec![window("tutor-1", 1, "09:00", "17:00")];
    // Both exactly match the proposed interval.
    let bookings = vec![
        booking("tutor-1", monday_at(10, 0), 60, BookingStatus::Cancelled),
        booking("tutor-1", monday_at(10, 0), 60, BookingStatus::Refunded),
    ];

    let result = check_time_slot_availability(monday_at(10, 0), 60, &windows, &bookings, "tutor-1");

    assert!(result.available);
    assert!(result.conflicting_booking.is_none());
}

#[test]
fn other_tutors_bookings_never_conflict() {
    let windows = vec![window("tutor-1", 1, "09:00", "17:00")];
    let bookings = vec![booking(
        "tutor-2",
        monday_at(10, 0),
        60,
        BookingStatus::Confirmed,
    )];

    let result = check_time_slot_availability(monday_at(10, 0), 60, &windows, &bookings, "tutor-1");

    assert!(result.available);
}

#[test]
fn adjacent_booking_is_not_a_conflict() {
    // Half-open boundary property: existing booking ends at 11:00, proposal
    // starts at 11:00 — no conflict.
    let windows = vec![window("tutor-1", 1, "09:00", "17:00")];
    let bookings = vec![booking(
        "tutor-1",
        monday_at(10, 0),
        60,
        BookingStatus::Confirmed,
    )];

    let after = check_time_slot_availability(monday_at(11, 0), 60, &windows, &bookings, "tutor-1");
    assert!(after.available);

    // And a proposal ending exactly at 10:00, when the existing one starts.
    let before = check_time_slot_availability(monday_at(9, 0), 60, &windows, &bookings, "tutor-1");
    assert!(before.available);
}

#[test]
fn first_conflicting_booking_is_reported() {
    let windows = vec![window("tutor-1", 1, "09:00", "17:00")];
    let first = booking("tutor-1", monday_at(10, 0), 60, BookingStatus::Confirmed);
    let second = booking("tutor-1", monday_at(10, 30), 60, BookingStatus::Confirmed);

    let result = check_time_slot_availability(
        monday_at(10, 15),
        60,
        &windows,
        &[first.clone(), second],
        "tutor-1",
    );

    assert!(!result.available);
    assert_eq!(result.conflicting_booking, Some(first));
}

// ── Purity ──────────────────────────────────────────────────────────────────

#[test]
fn identical_inputs_yield_identical_results() {
    let windows = vec![window("tutor-1", 1, "09:00", "17:00")];
    let bookings = vec![booking(
        "tutor-1",
        monday_at(10, 0),
        60,
        BookingStatus::Confirmed,
    )];

    let a = check_time_slot_availability(monday_at(10, 30), 30, &windows, &bookings, "tutor-1");
    let b = check_time_slot_availability(monday_at(10, 30), 30, &windows, &bookings, "tutor-1");

    assert_eq!(a, b);
}
