//! Staff member model and related types.
//!
//! This module defines the StaffMember struct and EmploymentType enum
//! for representing rostered workers in the scheduling system.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the type of employment arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    /// Paid by the hour; attracts employer NI and pension contributions.
    Hourly,
    /// Salaried; costed at an hourly equivalent with NI and pension.
    Salary,
    /// Contractor; no employer NI or pension contributions.
    Contractor,
}

/// Represents a staff member available for rota allocation.
///
/// Staff records are read-only inputs to the scheduler. The one computed
/// value is the wage rate: when `wage_rate` is absent the orchestrator
/// substitutes the job role's default rate (or the configured minimum wage)
/// before ranking, and logs the substitution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    /// Unique identifier for the staff member.
    pub id: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Primary job title (e.g. "Server", "Head Chef").
    pub job_title: String,
    /// Additional job titles this person can cover.
    #[serde(default)]
    pub secondary_roles: Vec<String>,
    /// Hourly wage rate. Absent rates are defaulted before ranking.
    #[serde(default)]
    pub wage_rate: Option<Decimal>,
    /// The type of employment arrangement.
    pub employment_type: EmploymentType,
    /// Maximum hours this person may be rostered in one week.
    #[serde(default = "default_max_hours")]
    pub max_hours_per_week: Decimal,
    /// Whether the person is available for allocation this week.
    pub is_available: bool,
    /// Ranking score; higher scores are allocated first.
    #[serde(default)]
    pub hi_score: i32,
}

fn default_max_hours() -> Decimal {
    Decimal::new(40, 0)
}

impl StaffMember {
    /// Returns true if the staff member is a contractor.
    ///
    /// # Examples
    ///
    /// ```
    /// use rota_engine::models::{EmploymentType, StaffMember};
    ///
    /// let contractor = StaffMember {
    ///     id: "staff_001".to_string(),
    ///     first_name: "Alex".to_string(),
    ///     last_name: "Reid".to_string(),
    ///     job_title: "Server".to_string(),
    ///     secondary_roles: vec![],
    ///     wage_rate: None,
    ///     employment_type: EmploymentType::Contractor,
    ///     max_hours_per_week: rust_decimal::Decimal::new(40, 0),
    ///     is_available: true,
    ///     hi_score: 0,
    /// };
    /// assert!(contractor.is_contractor());
    /// ```
    pub fn is_contractor(&self) -> bool {
        self.employment_type == EmploymentType::Contractor
    }

    /// Returns true if the staff member is salaried.
    pub fn is_salaried(&self) -> bool {
        self.employment_type == EmploymentType::Salary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_staff(employment_type: EmploymentType) -> StaffMember {
        StaffMember {
            id: "staff_001".to_string(),
            first_name: "Alex".to_string(),
            last_name: "Reid".to_string(),
            job_title: "Server".to_string(),
            secondary_roles: vec![],
            wage_rate: Some(Decimal::new(1200, 2)),
            employment_type,
            max_hours_per_week: Decimal::new(40, 0),
            is_available: true,
            hi_score: 5,
        }
    }

    #[test]
    fn test_deserialize_hourly_staff() {
        let json = r#"{
            "id": "staff_001",
            "first_name": "Alex",
            "last_name": "Reid",
            "job_title": "Server",
            "employment_type": "hourly",
            "is_available": true,
            "hi_score": 9
        }"#;

        let staff: StaffMember = serde_json::from_str(json).unwrap();
        assert_eq!(staff.id, "staff_001");
        assert_eq!(staff.employment_type, EmploymentType::Hourly);
        assert_eq!(staff.wage_rate, None);
        assert_eq!(staff.max_hours_per_week, Decimal::new(40, 0));
        assert!(staff.secondary_roles.is_empty());
        assert_eq!(staff.hi_score, 9);
    }

    #[test]
    fn test_deserialize_staff_with_secondary_roles_and_rate() {
        let json = r#"{
            "id": "staff_002",
            "first_name": "Sam",
            "last_name": "Patel",
            "job_title": "Bartender",
            "secondary_roles": ["Server", "Host"],
            "wage_rate": "13.25",
            "employment_type": "salary",
            "max_hours_per_week": "35",
            "is_available": true,
            "hi_score": 7
        }"#;

        let staff: StaffMember = serde_json::from_str(json).unwrap();
        assert_eq!(staff.secondary_roles, vec!["Server", "Host"]);
        assert_eq!(staff.wage_rate, Some(Decimal::new(1325, 2)));
        assert_eq!(staff.max_hours_per_week, Decimal::new(35, 0));
        assert!(staff.is_salaried());
    }

    #[test]
    fn test_serialize_staff_round_trip() {
        let staff = create_test_staff(EmploymentType::Hourly);
        let json = serde_json::to_string(&staff).unwrap();
        let deserialized: StaffMember = serde_json::from_str(&json).unwrap();
        assert_eq!(staff, deserialized);
    }

    #[test]
    fn test_is_contractor() {
        assert!(create_test_staff(EmploymentType::Contractor).is_contractor());
        assert!(!create_test_staff(EmploymentType::Hourly).is_contractor());
        assert!(!create_test_staff(EmploymentType::Salary).is_contractor());
    }

    #[test]
    fn test_employment_type_serialization() {
        assert_eq!(
            serde_json::to_string(&EmploymentType::Hourly).unwrap(),
            "\"hourly\""
        );
        assert_eq!(
            serde_json::to_string(&EmploymentType::Salary).unwrap(),
            "\"salary\""
        );
        assert_eq!(
            serde_json::to_string(&EmploymentType::Contractor).unwrap(),
            "\"contractor\""
        );
    }
}
