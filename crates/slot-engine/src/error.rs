//! Error types for creation-time window validation.
//!
//! The engine operations themselves have no error taxonomy — "no
//! availability" and "conflict" are ordinary results. Only the validation
//! that guards window creation can fail.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WindowError {
    #[error("Invalid time '{0}': expected HH:MM in 24-hour format")]
    InvalidTime(String),

    #[error("Invalid day of week: {0} (expected 0-6, 0 = Sunday)")]
    InvalidDayOfWeek(u8),

    #[error("End time '{end}' must be after start time '{start}'")]
    EndNotAfterStart { start: String, end: String },

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Day {0} already has an active availability window for this tutor")]
    DayAlreadyCovered(u8),
}

pub type Result<T> = std::result::Result<T, WindowError>;
