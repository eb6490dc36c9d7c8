//! Time helpers — second-of-day conversions
//!
//! Access policy windows are stored as seconds since local midnight;
//! scans are compared in the same unit.

use chrono::{DateTime, Local, TimeZone, Timelike};

/// Second-of-day for a timestamp, minute granularity
///
/// Computed as `hour * 3600 + minute * 60`; seconds within the minute
/// are dropped, matching the unit stored on access policies.
pub fn day_seconds<Tz: TimeZone>(at: &DateTime<Tz>) -> i64 {
    i64::from(at.hour() * 3600 + at.minute() * 60)
}

/// Second-of-day right now, in the server's local timezone
pub fn local_day_seconds() -> i64 {
    day_seconds(&Local::now())
}
