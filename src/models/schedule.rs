//! Schedule output models.
//!
//! This module contains the [`Shift`] and [`ScheduleSummary`] types that
//! capture the outputs of a schedule generation run: the concrete shift list
//! plus aggregate cost-to-revenue metrics.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single generated work shift with its labour cost breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    /// The staff member assigned to this shift.
    pub staff_id: String,
    /// The date of the shift.
    pub date: NaiveDate,
    /// Full day name for the shift date (e.g. "Monday").
    pub day_name: String,
    /// Shift start time.
    pub start_time: NaiveTime,
    /// Shift end time. An end earlier than the start means overnight.
    pub end_time: NaiveTime,
    /// Unpaid break length in minutes.
    pub break_minutes: u32,
    /// The job role being filled.
    pub job_role_id: String,
    /// True when the staff member's primary title differs from the role filled.
    pub is_secondary_role: bool,
    /// Snapshot of the staff member's ranking score at allocation time.
    pub hi_score: i32,
    /// Wage cost for the shift (rate x hours).
    pub wage_cost: Decimal,
    /// Employer National Insurance cost.
    pub ni_cost: Decimal,
    /// Employer pension contribution.
    pub pension_cost: Decimal,
    /// Total labour cost (wage + NI + pension).
    pub total_cost: Decimal,
    /// The shift rule that produced this shift, when rule-derived.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
    /// The name of the originating rule, when rule-derived.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_name: Option<String>,
}

/// The complete result of a schedule generation run.
///
/// An empty shift list is a valid terminal state (reported by the engine as
/// a warning diagnostic, not an error). The summary is immutable output: the
/// presentation layer displays it, the data layer persists it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    /// Unique identifier for this generation run.
    pub schedule_id: Uuid,
    /// When the schedule was generated.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that generated the schedule.
    pub engine_version: String,
    /// Every generated shift, in generation order.
    pub shifts: Vec<Shift>,
    /// Sum of `total_cost` over all shifts.
    pub total_cost: Decimal,
    /// Sum of forecast revenue over the requested date range.
    pub total_revenue: Decimal,
    /// `total_cost / total_revenue * 100`, zero when revenue is zero.
    pub cost_percentage: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_shift(total_cost: Decimal) -> Shift {
        Shift {
            staff_id: "staff_001".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            day_name: "Monday".to_string(),
            start_time: NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
            break_minutes: 30,
            job_role_id: "role_server".to_string(),
            is_secondary_role: false,
            hi_score: 9,
            wage_cost: dec("54.00"),
            ni_cost: dec("4.73"),
            pension_cost: dec("1.62"),
            total_cost,
            rule_id: Some("rule_001".to_string()),
            rule_name: Some("Monday lunch".to_string()),
        }
    }

    #[test]
    fn test_total_cost_equals_sum_of_shifts() {
        let shifts = vec![
            sample_shift(dec("60.35")),
            sample_shift(dec("55.00")),
            sample_shift(dec("47.15")),
        ];
        let sum: Decimal = shifts.iter().map(|s| s.total_cost).sum();

        let summary = ScheduleSummary {
            schedule_id: Uuid::nil(),
            generated_at: Utc::now(),
            engine_version: "0.1.0".to_string(),
            shifts,
            total_cost: sum,
            total_revenue: dec("4000"),
            cost_percentage: sum / dec("4000") * dec("100"),
        };

        let recomputed: Decimal = summary.shifts.iter().map(|s| s.total_cost).sum();
        assert_eq!(summary.total_cost, recomputed);
    }

    #[test]
    fn test_shift_serialization_omits_absent_rule() {
        let mut shift = sample_shift(dec("60.35"));
        shift.rule_id = None;
        shift.rule_name = None;

        let json = serde_json::to_string(&shift).unwrap();
        assert!(!json.contains("rule_id"));
        assert!(!json.contains("rule_name"));
    }

    #[test]
    fn test_shift_serialization_round_trip() {
        let shift = sample_shift(dec("60.35"));
        let json = serde_json::to_string(&shift).unwrap();
        assert!(json.contains("\"day_name\":\"Monday\""));
        assert!(json.contains("\"rule_id\":\"rule_001\""));

        let deserialized: Shift = serde_json::from_str(&json).unwrap();
        assert_eq!(shift, deserialized);
    }

    #[test]
    fn test_summary_serialization_round_trip() {
        let summary = ScheduleSummary {
            schedule_id: Uuid::nil(),
            generated_at: DateTime::parse_from_rfc3339("2026-03-01T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            engine_version: "0.1.0".to_string(),
            shifts: vec![sample_shift(dec("60.35"))],
            total_cost: dec("60.35"),
            total_revenue: dec("1000"),
            cost_percentage: dec("6.035"),
        };

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"schedule_id\":\"00000000-0000-0000-0000-000000000000\""));
        let deserialized: ScheduleSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, deserialized);
    }
}
