//! Data records consumed and produced by the availability engine.
//!
//! Windows and bookings are read-only inputs fetched by the caller (one query
//! or one transaction for a consistent snapshot); [`TimeSlot`] and
//! [`AvailabilityCheckResult`] are the engine's output shapes and serialize
//! to the JSON the HTTP handlers return.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A recurring weekly interval during which a tutor accepts bookings.
///
/// `start_time` and `end_time` are wall-clock `HH:MM` strings interpreted in
/// UTC; `end_time` must be strictly after `start_time`. Shape validation
/// happens at creation time via [`crate::validate::validate_window`] — the
/// engine itself assumes rows are well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringAvailabilityWindow {
    /// Opaque identifier of the owning tutor.
    pub tutor_id: String,
    /// Recurring weekday this window applies to: 0–6, 0 = Sunday.
    pub day_of_week: u8,
    /// Window start as `HH:MM` (24-hour, UTC).
    pub start_time: String,
    /// Window end as `HH:MM` (24-hour, UTC), strictly after `start_time`.
    pub end_time: String,
    /// Informational IANA timezone identifier. Interval math is UTC-only;
    /// this field is validated at creation but never used for conversion.
    pub timezone: String,
    /// Inactive windows are excluded from all availability computation.
    pub is_active: bool,
}

/// Lifecycle status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
    Refunded,
}

impl BookingStatus {
    /// Whether a booking in this status occupies its time interval.
    ///
    /// Cancelled and refunded bookings are treated as not occupying their
    /// slot; every other status blocks overlapping bookings.
    pub fn blocks_slot(self) -> bool {
        !matches!(self, BookingStatus::Cancelled | BookingStatus::Refunded)
    }
}

/// An existing booking, occupying the half-open interval
/// `[scheduled_at, scheduled_at + duration_minutes)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub tutor_id: String,
    pub student_id: String,
    /// Absolute UTC start instant.
    pub scheduled_at: DateTime<Utc>,
    /// Booking length in minutes.
    pub duration_minutes: u32,
    pub status: BookingStatus,
}

impl Booking {
    /// Exclusive end instant of the booking's interval.
    pub fn end(&self) -> DateTime<Utc> {
        self.scheduled_at + Duration::minutes(i64::from(self.duration_minutes))
    }
}

/// A candidate bookable interval for one calendar date.
///
/// Unavailable candidates are emitted too, flagged with a `reason` — the
/// caller decides how to present them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Verdict for a single proposed booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityCheckResult {
    pub available: bool,
    /// Human-readable explanation when unavailable; surfaced verbatim to the
    /// end user by the booking-creation handler.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// The specific booking causing unavailability, when the cause is a
    /// conflict rather than a missing or exceeded window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conflicting_booking: Option<Booking>,
}

impl AvailabilityCheckResult {
    /// An available verdict with no further detail.
    pub fn available() -> Self {
        Self {
            available: true,
            reason: None,
            conflicting_booking: None,
        }
    }

    /// An unavailable verdict with a reason and no conflicting booking.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            available: false,
            reason: Some(reason.into()),
            conflicting_booking: None,
        }
    }

    /// An unavailable verdict caused by a specific conflicting booking.
    pub fn conflict(reason: impl Into<String>, booking: Booking) -> Self {
        Self {
            available: false,
            reason: Some(reason.into()),
            conflicting_booking: Some(booking),
        }
    }
}
