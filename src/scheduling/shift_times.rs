//! Shift time resolution.
//!
//! This module provides the fixed segment-time table used by the threshold
//! fallback, parsing for externally-supplied `HH:MM` strings, and duration
//! arithmetic that handles overnight wrap.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The two staffing segments of a trading day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    /// Lunch/daytime service.
    Day,
    /// Dinner/evening service.
    Evening,
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Segment::Day => write!(f, "day"),
            Segment::Evening => write!(f, "evening"),
        }
    }
}

/// Start, end and break for one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentTimes {
    /// Segment start time.
    pub start: NaiveTime,
    /// Segment end time.
    pub end: NaiveTime,
    /// Unpaid break in minutes.
    pub break_minutes: u32,
}

fn time(h: u32, m: u32) -> NaiveTime {
    // Inputs are compile-time constants from the table below.
    NaiveTime::from_hms_opt(h, m, 0).expect("valid segment time")
}

/// Resolves the fixed start/end/break for a segment.
///
/// Segment times come from a fixed table, not from configuration:
///
/// | Segment | Weekday       | Weekend       |
/// |---------|---------------|---------------|
/// | Day     | 11:00 - 16:00 | 10:00 - 16:30 |
/// | Evening | 17:00 - 23:00 | 16:30 - 23:00 |
///
/// Every segment carries a 30-minute unpaid break.
pub fn segment_times(segment: Segment, weekend: bool) -> SegmentTimes {
    let (start, end) = match (segment, weekend) {
        (Segment::Day, false) => (time(11, 0), time(16, 0)),
        (Segment::Day, true) => (time(10, 0), time(16, 30)),
        (Segment::Evening, false) => (time(17, 0), time(23, 0)),
        (Segment::Evening, true) => (time(16, 30), time(23, 0)),
    };
    SegmentTimes {
        start,
        end,
        break_minutes: 30,
    }
}

/// Parses an externally-supplied `HH:MM` (or `HH:MM:SS`) time string.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTime`] naming the offending record when the
/// string does not parse. Silent coercion to a zero-length shift is
/// deliberately not performed.
///
/// # Examples
///
/// ```
/// use rota_engine::scheduling::parse_time;
///
/// assert!(parse_time("11:00", "shift rule 'r1'").is_ok());
/// assert!(parse_time("25:99", "shift rule 'r1'").is_err());
/// ```
pub fn parse_time(value: &str, context: &str) -> EngineResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| EngineError::InvalidTime {
            value: value.to_string(),
            context: context.to_string(),
        })
}

/// Computes shift duration in decimal hours.
///
/// An end time numerically earlier than the start is treated as an overnight
/// shift (+24h). Break minutes are subtracted; the result never goes below
/// zero.
///
/// # Examples
///
/// ```
/// use chrono::NaiveTime;
/// use rota_engine::scheduling::shift_hours;
/// use rust_decimal::Decimal;
///
/// let start = NaiveTime::from_hms_opt(11, 0, 0).unwrap();
/// let end = NaiveTime::from_hms_opt(16, 0, 0).unwrap();
/// assert_eq!(shift_hours(start, end, 30), Decimal::new(45, 1)); // 4.5
/// ```
pub fn shift_hours(start: NaiveTime, end: NaiveTime, break_minutes: u32) -> Decimal {
    let mut minutes = (end - start).num_minutes();
    if minutes < 0 {
        minutes += 24 * 60;
    }
    let worked = (minutes - i64::from(break_minutes)).max(0);
    Decimal::new(worked, 0) / Decimal::new(60, 0)
}
