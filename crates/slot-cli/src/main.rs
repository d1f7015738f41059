//! `slots` CLI — run availability queries against windows/bookings JSON files.
//!
//! ## Usage
//!
//! ```sh
//! # Validate a proposed booking
//! slots check --windows windows.json --bookings bookings.json \
//!   --tutor tutor-1 --at 2026-03-16T10:00:00Z --duration 60
//!
//! # Enumerate candidate slots for one date
//! slots list --windows windows.json --tutor tutor-1 \
//!   --date 2026-03-16 --duration 60
//!
//! # Which dates in a range have at least one open slot
//! slots dates --windows windows.json --tutor tutor-1 \
//!   --from 2026-03-16 --to 2026-03-22 --duration 60
//!
//! # Windows may come from stdin
//! cat windows.json | slots list --tutor tutor-1 --date 2026-03-16 --duration 60
//! ```
//!
//! An unavailable verdict is ordinary output, not a failure — `check` exits 0
//! either way and prints the verdict JSON.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use clap::{Args, Parser, Subcommand};
use slot_engine::{Booking, RecurringAvailabilityWindow};
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Tutor availability and booking-conflict queries"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Inputs shared by every subcommand.
#[derive(Args)]
struct ScheduleArgs {
    /// Windows JSON file (reads from stdin if omitted)
    #[arg(long)]
    windows: Option<String>,
    /// Bookings JSON file (assumed empty if omitted)
    #[arg(long)]
    bookings: Option<String>,
    /// Tutor identifier to query
    #[arg(long)]
    tutor: String,
    /// Session duration in minutes
    #[arg(long)]
    duration: u32,
    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a single proposed booking
    Check {
        #[command(flatten)]
        schedule: ScheduleArgs,
        /// Proposed start instant (RFC 3339, e.g. 2026-03-16T10:00:00Z)
        #[arg(long)]
        at: String,
    },
    /// Enumerate all candidate slots for one calendar date
    List {
        #[command(flatten)]
        schedule: ScheduleArgs,
        /// Calendar date (YYYY-MM-DD, UTC)
        #[arg(long)]
        date: String,
    },
    /// List the dates in an inclusive range with at least one open slot
    Dates {
        #[command(flatten)]
        schedule: ScheduleArgs,
        /// Range start (YYYY-MM-DD, inclusive)
        #[arg(long)]
        from: String,
        /// Range end (YYYY-MM-DD, inclusive)
        #[arg(long)]
        to: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { schedule, at } => {
            let (windows, bookings) = load_schedule(&schedule)?;
            let scheduled_at = parse_datetime(&at)?;

            let result = slot_engine::check_time_slot_availability(
                scheduled_at,
                schedule.duration,
                &windows,
                &bookings,
                &schedule.tutor,
            );
            write_json(schedule.output.as_deref(), &result)?;
        }
        Commands::List { schedule, date } => {
            let (windows, bookings) = load_schedule(&schedule)?;
            let date = parse_date(&date)?;

            let slots = slot_engine::get_available_time_slots(
                date,
                schedule.duration,
                &windows,
                &bookings,
                &schedule.tutor,
            );
            write_json(schedule.output.as_deref(), &slots)?;
        }
        Commands::Dates { schedule, from, to } => {
            let (windows, bookings) = load_schedule(&schedule)?;
            let from = parse_date(&from)?;
            let to = parse_date(&to)?;

            let dates = slot_engine::get_available_dates(
                from,
                to,
                &windows,
                &bookings,
                &schedule.tutor,
                schedule.duration,
            );
            let formatted: Vec<String> =
                dates.iter().map(|d| d.format("%Y-%m-%d").to_string()).collect();
            write_json(schedule.output.as_deref(), &formatted)?;
        }
    }

    Ok(())
}

/// Load the windows and bookings inputs for a subcommand.
///
/// Windows come from `--windows` or stdin; bookings are optional and default
/// to an empty list.
fn load_schedule(
    args: &ScheduleArgs,
) -> Result<(Vec<RecurringAvailabilityWindow>, Vec<Booking>)> {
    let windows_raw = read_input(args.windows.as_deref())?;
    let windows: Vec<RecurringAvailabilityWindow> =
        serde_json::from_str(&windows_raw).context("Failed to parse windows JSON")?;

    let bookings: Vec<Booking> = match &args.bookings {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path))?;
            serde_json::from_str(&raw).context("Failed to parse bookings JSON")?
        }
        None => Vec::new(),
    };

    Ok((windows, bookings))
}

/// Parse an RFC 3339 datetime, or a naive `YYYY-MM-DDTHH:MM:SS` interpreted
/// as UTC.
fn parse_datetime(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|ndt| ndt.and_utc())
        .with_context(|| format!("Invalid datetime: {}", s))
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").with_context(|| format!("Invalid date: {}", s))
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_json<T: serde::Serialize>(path: Option<&str>, value: &T) -> Result<()> {
    let pretty = serde_json::to_string_pretty(value)?;
    match path {
        Some(path) => {
            std::fs::write(path, pretty)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", pretty);
        }
    }
    Ok(())
}
