//! Schedule request model.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The request for one schedule generation run.
///
/// Created by the caller before invocation and read-only to the engine.
/// Dates missing from the forecast map are treated as zero-revenue days,
/// which generate no shifts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// First date of the week (inclusive).
    pub week_start: NaiveDate,
    /// Last date of the week (inclusive).
    pub week_end: NaiveDate,
    /// Forecast revenue per date.
    #[serde(default)]
    pub revenue_forecast: HashMap<NaiveDate, Decimal>,
}

impl ScheduleRequest {
    /// Validates the request before generation.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidRequest`] if `week_end` precedes `week_start`.
    /// - [`EngineError::InvalidRevenue`] for any negative forecast figure,
    ///   naming the offending date.
    pub fn validate(&self) -> EngineResult<()> {
        if self.week_end < self.week_start {
            return Err(EngineError::InvalidRequest {
                message: format!(
                    "week_end {} is before week_start {}",
                    self.week_end, self.week_start
                ),
            });
        }

        for (date, revenue) in &self.revenue_forecast {
            if *revenue < Decimal::ZERO {
                return Err(EngineError::InvalidRevenue {
                    date: *date,
                    value: revenue.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Returns the forecast revenue for a date, zero if absent.
    pub fn revenue_for(&self, date: NaiveDate) -> Decimal {
        self.revenue_forecast
            .get(&date)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Iterates every date from `week_start` to `week_end` inclusive.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.week_start
            .iter_days()
            .take_while(move |d| *d <= self.week_end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn week_request() -> ScheduleRequest {
        let mut revenue_forecast = HashMap::new();
        revenue_forecast.insert(make_date("2026-03-02"), Decimal::new(1000, 0));
        revenue_forecast.insert(make_date("2026-03-03"), Decimal::new(1500, 0));
        ScheduleRequest {
            week_start: make_date("2026-03-02"),
            week_end: make_date("2026-03-08"),
            revenue_forecast,
        }
    }

    #[test]
    fn test_validate_accepts_well_formed_request() {
        assert!(week_request().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let mut request = week_request();
        request.week_end = make_date("2026-03-01");
        match request.validate().unwrap_err() {
            EngineError::InvalidRequest { message } => {
                assert!(message.contains("before week_start"));
            }
            other => panic!("Expected InvalidRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_negative_revenue() {
        let mut request = week_request();
        request
            .revenue_forecast
            .insert(make_date("2026-03-04"), Decimal::new(-50, 0));
        match request.validate().unwrap_err() {
            EngineError::InvalidRevenue { date, value } => {
                assert_eq!(date, make_date("2026-03-04"));
                assert_eq!(value, "-50");
            }
            other => panic!("Expected InvalidRevenue, got {:?}", other),
        }
    }

    #[test]
    fn test_revenue_for_missing_date_is_zero() {
        let request = week_request();
        assert_eq!(request.revenue_for(make_date("2026-03-05")), Decimal::ZERO);
        assert_eq!(
            request.revenue_for(make_date("2026-03-02")),
            Decimal::new(1000, 0)
        );
    }

    #[test]
    fn test_dates_are_inclusive() {
        let request = week_request();
        let dates: Vec<NaiveDate> = request.dates().collect();
        assert_eq!(dates.len(), 7);
        assert_eq!(dates[0], make_date("2026-03-02"));
        assert_eq!(dates[6], make_date("2026-03-08"));
    }

    #[test]
    fn test_single_day_request() {
        let request = ScheduleRequest {
            week_start: make_date("2026-03-02"),
            week_end: make_date("2026-03-02"),
            revenue_forecast: HashMap::new(),
        };
        assert_eq!(request.dates().count(), 1);
    }

    #[test]
    fn test_request_deserialization_with_date_keys() {
        let json = r#"{
            "week_start": "2026-03-02",
            "week_end": "2026-03-08",
            "revenue_forecast": {
                "2026-03-02": "1000",
                "2026-03-07": "3500.50"
            }
        }"#;

        let request: ScheduleRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            request.revenue_for(make_date("2026-03-07")),
            Decimal::new(350050, 2)
        );
    }
}
