//! Shared test utilities
//!
//! Common helpers used across test modules. Only compiled in test builds.

use chrono::{DateTime, Duration, TimeZone, Utc};

/// A fixed, known anchor instant: 2024-01-01T00:00:00Z (a Monday).
#[must_use]
pub fn jan_first() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// `jan_first()` shifted by a number of whole days (negative shifts back).
#[must_use]
pub fn days_after(days: i64) -> DateTime<Utc> {
    jan_first() + Duration::days(days)
}
