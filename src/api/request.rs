//! Request types for the Rota Generation Engine API.
//!
//! This module defines the JSON request structure for the `/schedule`
//! endpoint. The domain models are serde-ready, so the body carries them
//! directly; everything except the request window and roster defaults to
//! empty, in which case the engine falls back to synthesized staffing.

use serde::{Deserialize, Serialize};

use crate::models::{JobRole, RevenueThreshold, ScheduleRequest, ShiftRule, StaffMember};

/// Request body for the `/schedule` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleGenerationRequest {
    /// The week window and revenue forecast.
    pub request: ScheduleRequest,
    /// The staff roster, already scoped to one location upstream.
    pub staff: Vec<StaffMember>,
    /// Job role definitions.
    #[serde(default)]
    pub job_roles: Vec<JobRole>,
    /// Revenue-banded staffing thresholds.
    #[serde(default)]
    pub thresholds: Vec<RevenueThreshold>,
    /// Configured day-specific shift rules.
    #[serde(default)]
    pub shift_rules: Vec<ShiftRule>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_request_deserializes() {
        let json = r#"{
            "request": {
                "week_start": "2026-03-02",
                "week_end": "2026-03-08",
                "revenue_forecast": {"2026-03-02": "1000"}
            },
            "staff": []
        }"#;

        let request: ScheduleGenerationRequest = serde_json::from_str(json).unwrap();
        assert!(request.staff.is_empty());
        assert!(request.job_roles.is_empty());
        assert!(request.thresholds.is_empty());
        assert!(request.shift_rules.is_empty());
    }

    #[test]
    fn test_full_request_deserializes() {
        let json = r#"{
            "request": {
                "week_start": "2026-03-02",
                "week_end": "2026-03-08"
            },
            "staff": [{
                "id": "staff_001",
                "first_name": "Alex",
                "last_name": "Reid",
                "job_title": "Server",
                "employment_type": "hourly",
                "is_available": true,
                "hi_score": 9
            }],
            "job_roles": [{"id": "role_server", "title": "Server", "is_kitchen": false}],
            "shift_rules": [{
                "id": "rule_001",
                "day": "mon",
                "job_role_id": "role_server",
                "start_time": "11:00",
                "end_time": "16:00",
                "min_staff": 1,
                "max_staff": 2
            }]
        }"#;

        let request: ScheduleGenerationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.staff.len(), 1);
        assert_eq!(request.shift_rules.len(), 1);
    }
}
