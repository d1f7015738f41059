//! WASM bindings for slot-engine.
//!
//! Exposes the three availability operations to JavaScript via `wasm-bindgen`.
//! All complex types are passed as JSON strings: windows and bookings arrive
//! as JSON arrays matching the engine's serde shapes, results go back as JSON
//! with RFC 3339 datetimes.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/slot-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;
use slot_engine::{Booking, RecurringAvailabilityWindow};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct BookingDto {
    tutor_id: String,
    student_id: String,
    scheduled_at: String,
    duration_minutes: u32,
    status: slot_engine::BookingStatus,
}

impl From<&Booking> for BookingDto {
    fn from(b: &Booking) -> Self {
        Self {
            tutor_id: b.tutor_id.clone(),
            student_id: b.student_id.clone(),
            scheduled_at: b.scheduled_at.to_rfc3339(),
            duration_minutes: b.duration_minutes,
            status: b.status,
        }
    }
}

#[derive(Serialize)]
struct TimeSlotDto {
    start: String,
    end: String,
    available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

#[derive(Serialize)]
struct CheckResultDto {
    available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    conflicting_booking: Option<BookingDto>,
}

// ---------------------------------------------------------------------------
// Helpers: parse JSON and datetime inputs from JavaScript
// ---------------------------------------------------------------------------

/// Parse an ISO 8601 datetime string into `DateTime<Utc>`.
///
/// Accepts both RFC 3339 (with timezone offset, e.g., "2026-03-16T10:00:00Z")
/// and naive local time (e.g., "2026-03-16T10:00:00"), which is interpreted
/// as UTC.
fn parse_datetime(s: &str) -> Result<DateTime<Utc>, JsValue> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|ndt| ndt.and_utc())
        .map_err(|e| JsValue::from_str(&format!("Invalid datetime '{}': {}", s, e)))
}

/// Parse a `YYYY-MM-DD` calendar date string.
fn parse_date(s: &str) -> Result<NaiveDate, JsValue> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| JsValue::from_str(&format!("Invalid date '{}': {}", s, e)))
}

fn parse_windows_json(json: &str) -> Result<Vec<RecurringAvailabilityWindow>, JsValue> {
    serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("Invalid windows JSON: {}", e)))
}

fn parse_bookings_json(json: &str) -> Result<Vec<Booking>, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid bookings JSON: {}", e)))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Validate a single proposed booking against a tutor's recurring windows and
/// existing bookings.
///
/// `windows_json` and `bookings_json` must be JSON arrays matching the
/// engine's window and booking shapes. Returns a JSON object with
/// `available`, optional `reason`, and optional `conflicting_booking`.
#[wasm_bindgen(js_name = "checkTimeSlotAvailability")]
pub fn check_time_slot_availability(
    scheduled_at: &str,
    duration_minutes: u32,
    windows_json: &str,
    bookings_json: &str,
    tutor_id: &str,
) -> Result<String, JsValue> {
    let scheduled_at = parse_datetime(scheduled_at)?;
    let windows = parse_windows_json(windows_json)?;
    let bookings = parse_bookings_json(bookings_json)?;

    let result = slot_engine::check_time_slot_availability(
        scheduled_at,
        duration_minutes,
        &windows,
        &bookings,
        tutor_id,
    );

    let dto = CheckResultDto {
        available: result.available,
        reason: result.reason,
        conflicting_booking: result.conflicting_booking.as_ref().map(BookingDto::from),
    };
    to_json(&dto)
}

/// Enumerate all candidate slots for one calendar date.
///
/// `date` is a `YYYY-MM-DD` string. Returns a JSON array of
/// `{start, end, available, reason?}` objects with RFC 3339 datetimes;
/// unavailable candidates are included, flagged.
#[wasm_bindgen(js_name = "getAvailableTimeSlots")]
pub fn get_available_time_slots(
    date: &str,
    duration_minutes: u32,
    windows_json: &str,
    bookings_json: &str,
    tutor_id: &str,
) -> Result<String, JsValue> {
    let date = parse_date(date)?;
    let windows = parse_windows_json(windows_json)?;
    let bookings = parse_bookings_json(bookings_json)?;

    let slots = slot_engine::get_available_time_slots(
        date,
        duration_minutes,
        &windows,
        &bookings,
        tutor_id,
    );

    let dtos: Vec<TimeSlotDto> = slots
        .into_iter()
        .map(|s| TimeSlotDto {
            start: s.start.to_rfc3339(),
            end: s.end.to_rfc3339(),
            available: s.available,
            reason: s.reason,
        })
        .collect();
    to_json(&dtos)
}

/// Enumerate the calendar dates in an inclusive range that have at least one
/// available slot.
///
/// `start_date` and `end_date` are `YYYY-MM-DD` strings. Returns a JSON array
/// of `YYYY-MM-DD` strings.
#[wasm_bindgen(js_name = "getAvailableDates")]
pub fn get_available_dates(
    start_date: &str,
    end_date: &str,
    windows_json: &str,
    bookings_json: &str,
    tutor_id: &str,
    duration_minutes: u32,
) -> Result<String, JsValue> {
    let start_date = parse_date(start_date)?;
    let end_date = parse_date(end_date)?;
    let windows = parse_windows_json(windows_json)?;
    let bookings = parse_bookings_json(bookings_json)?;

    let dates = slot_engine::get_available_dates(
        start_date,
        end_date,
        &windows,
        &bookings,
        tutor_id,
        duration_minutes,
    );

    let dtos: Vec<String> = dates.iter().map(|d| d.format("%Y-%m-%d").to_string()).collect();
    to_json(&dtos)
}
