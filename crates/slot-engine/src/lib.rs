//! # slot-engine
//!
//! Tutor availability and booking-conflict engine for recurring weekly schedules.
//!
//! Given a tutor's recurring weekly availability windows and their existing
//! bookings, the engine computes which time slots are actually bookable and
//! validates proposed bookings against overlap and boundary rules. All three
//! operations are pure functions over plain data records — no I/O, no shared
//! state — so callers supply a consistent snapshot of rows and re-validate at
//! write time themselves.
//!
//! ## Modules
//!
//! - [`availability`] — the three engine operations (check, enumerate, date range)
//! - [`overlap`] — the shared half-open interval overlap primitive
//! - [`types`] — availability windows, bookings, and result shapes
//! - [`validate`] — creation-time window validation (the CRUD-side guard)
//! - [`error`] — error types

pub mod availability;
pub mod error;
pub mod overlap;
pub mod types;
pub mod validate;

pub use availability::{
    check_time_slot_availability, get_available_dates, get_available_time_slots,
    SLOT_INTERVAL_MINUTES,
};
pub use error::WindowError;
pub use types::{
    AvailabilityCheckResult, Booking, BookingStatus, RecurringAvailabilityWindow, TimeSlot,
};
pub use validate::validate_window;
