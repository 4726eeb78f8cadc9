//! Shift rule model and day-of-week codes.
//!
//! A shift rule is a configured, day-specific staffing requirement (role,
//! time window, headcount). Rules take priority over the revenue-threshold
//! fallback when generating a day's shifts.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::JobRole;

/// Short day-of-week code used to attach rules to days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayCode {
    /// Monday.
    Mon,
    /// Tuesday.
    Tue,
    /// Wednesday.
    Wed,
    /// Thursday.
    Thu,
    /// Friday.
    Fri,
    /// Saturday.
    Sat,
    /// Sunday.
    Sun,
}

impl DayCode {
    /// Returns the full day name (e.g. "Monday").
    pub fn day_name(self) -> &'static str {
        match self {
            DayCode::Mon => "Monday",
            DayCode::Tue => "Tuesday",
            DayCode::Wed => "Wednesday",
            DayCode::Thu => "Thursday",
            DayCode::Fri => "Friday",
            DayCode::Sat => "Saturday",
            DayCode::Sun => "Sunday",
        }
    }

    /// Returns true for Saturday and Sunday.
    pub fn is_weekend(self) -> bool {
        matches!(self, DayCode::Sat | DayCode::Sun)
    }
}

impl From<Weekday> for DayCode {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayCode::Mon,
            Weekday::Tue => DayCode::Tue,
            Weekday::Wed => DayCode::Wed,
            Weekday::Thu => DayCode::Thu,
            Weekday::Fri => DayCode::Fri,
            Weekday::Sat => DayCode::Sat,
            Weekday::Sun => DayCode::Sun,
        }
    }
}

impl std::fmt::Display for DayCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.day_name())
    }
}

/// A configured staffing requirement for one day of the week.
///
/// Start and end times are carried as strings because they arrive from
/// external configuration; they are parsed (and rejected if malformed) at
/// the point of use rather than trusted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftRule {
    /// Unique identifier for the rule.
    pub id: String,
    /// The day of the week this rule applies to.
    pub day: DayCode,
    /// Optional human-readable rule name (e.g. "Friday dinner service").
    #[serde(default)]
    pub name: Option<String>,
    /// The id of the job role this rule staffs.
    pub job_role_id: String,
    /// Embedded projection of the job role, when the upstream supplied one.
    #[serde(default)]
    pub job_role: Option<JobRole>,
    /// Shift start time as `HH:MM`.
    pub start_time: String,
    /// Shift end time as `HH:MM`. An end before the start means overnight.
    pub end_time: String,
    /// Number of slots to fill (best-effort).
    pub min_staff: u32,
    /// Upper headcount bound. Carried for configuration fidelity; the
    /// assignment policy fills exactly `min_staff` slots.
    pub max_staff: u32,
    /// Archived rules are ignored by the scheduler.
    #[serde(default)]
    pub archived: bool,
}
