//! Cycle date arithmetic
//!
//! Derives the cycle day, phase, and predicted next period from the single
//! tracked anchor date. All derivations are pure functions of the anchor
//! and a caller-supplied "now", so the same inputs always produce the same
//! snapshot.

use anyhow::{bail, Result};
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};

use crate::cycle::phase::{phase_for_day, CyclePhase};

/// Fixed cycle length used for the next-period prediction. A simple 28-day
/// rule over 86400-second days; no calendar-month semantics.
pub const CYCLE_LENGTH_DAYS: i64 = 28;

/// Year range for a tracked period start. The accepted formats describe
/// 4-digit years, and staying inside this range keeps the 28-day prediction
/// well clear of chrono's date limits.
pub const MIN_YEAR: i32 = 1;
/// Upper bound of the supported year range.
pub const MAX_YEAR: i32 = 9999;

/// Whether `instant` falls inside the supported year range.
#[must_use]
pub fn in_supported_range(instant: DateTime<Utc>) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&instant.year())
}

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Whole days elapsed between the period start and `now`.
///
/// Floors toward negative infinity, so a span of minus half a day is day -1,
/// not day 0. Day 0 is the day the period started; the count is negative
/// when `now` precedes the anchor and grows without bound when no new start
/// is marked.
#[must_use]
pub fn cycle_day(last_period: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - last_period)
        .num_milliseconds()
        .div_euclid(MILLIS_PER_DAY)
}

/// Predicted next period start: the anchor plus exactly 28 days.
#[must_use]
pub fn next_period(last_period: DateTime<Utc>) -> DateTime<Utc> {
    last_period + Duration::days(CYCLE_LENGTH_DAYS)
}

/// Everything the display needs, derived from one `(anchor, now)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleSnapshot {
    /// The tracked period start the snapshot was computed from
    pub last_period: DateTime<Utc>,
    /// Whole days elapsed since the period start (signed)
    pub day: i64,
    /// Phase classification of `day`
    pub phase: CyclePhase,
    /// Predicted next period start
    pub next_period: DateTime<Utc>,
}

impl CycleSnapshot {
    /// Derive a snapshot from the tracked anchor and the current instant.
    #[must_use]
    pub fn compute(last_period: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let day = cycle_day(last_period, now);
        Self {
            last_period,
            day,
            phase: phase_for_day(day),
            next_period: next_period(last_period),
        }
    }
}

/// Parse a user-supplied period start date.
///
/// Accepts an RFC 3339 date-time (the stored representation) or a plain
/// `YYYY-MM-DD` calendar date, which anchors to midnight UTC. Dates outside
/// the 4-digit year range and anything unparseable are rejected with a hint
/// at the expected format.
pub fn parse_period_date(input: &str) -> Result<DateTime<Utc>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        bail!("No date given. Please use the YYYY-MM-DD format.");
    }

    let parsed = if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        instant.with_timezone(&Utc)
    } else if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        date.and_time(NaiveTime::MIN).and_utc()
    } else {
        bail!("Invalid date '{trimmed}'. Please use the YYYY-MM-DD format.");
    };

    // The %Y specifier also matches signed extended years, which would
    // overflow the next-period arithmetic.
    if !in_supported_range(parsed) {
        bail!("Invalid date '{trimmed}'. Please use the YYYY-MM-DD format.");
    }
    Ok(parsed)
}
