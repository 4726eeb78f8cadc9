//! Labour cost calculation.
//!
//! Pure cost arithmetic for one shift: wage cost, employer National
//! Insurance and employer pension contribution. Contractors attract neither
//! NI nor pension.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::SchedulerConfig;
use crate::models::EmploymentType;

/// The labour cost breakdown for one shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftCost {
    /// Wage cost (rate x hours).
    pub wage_cost: Decimal,
    /// Employer National Insurance cost.
    pub ni_cost: Decimal,
    /// Employer pension contribution.
    pub pension_cost: Decimal,
    /// Sum of the three components.
    pub total_cost: Decimal,
}

/// Calculates the labour cost of one shift.
///
/// - `wage_cost = wage_rate * hours`
/// - Employer NI applies only above an hourly threshold derived from the
///   configured weekly threshold over a standard week:
///   `(wage_rate - threshold) * hours * ni_rate`
/// - Employer pension is `wage_cost * pension_rate`
/// - Contractors pay neither NI nor pension
///
/// Each component is rounded to currency precision; the total is the exact
/// sum of the rounded components, so schedule-level totals add up without
/// drift.
///
/// This function is pure: identical input always produces identical output.
///
/// # Examples
///
/// ```
/// use rota_engine::config::SchedulerConfig;
/// use rota_engine::models::EmploymentType;
/// use rota_engine::scheduling::calculate_shift_cost;
/// use rust_decimal::Decimal;
///
/// let config = SchedulerConfig::default();
/// let cost = calculate_shift_cost(
///     Decimal::new(12, 0),
///     EmploymentType::Hourly,
///     Decimal::new(45, 1), // 4.5 hours
///     &config,
/// );
/// assert_eq!(cost.wage_cost, Decimal::new(5400, 2)); // 54.00
/// ```
pub fn calculate_shift_cost(
    wage_rate: Decimal,
    employment_type: EmploymentType,
    hours: Decimal,
    config: &SchedulerConfig,
) -> ShiftCost {
    let wage_cost = (wage_rate * hours).round_dp(2);

    let (ni_cost, pension_cost) = if employment_type == EmploymentType::Contractor {
        (Decimal::ZERO, Decimal::ZERO)
    } else {
        let threshold = config.ni_hourly_threshold();
        let ni = if wage_rate > threshold {
            ((wage_rate - threshold) * hours * config.ni_rate).round_dp(2)
        } else {
            Decimal::ZERO
        };
        let pension = (wage_cost * config.pension_rate).round_dp(2);
        (ni, pension)
    };

    ShiftCost {
        wage_cost,
        ni_cost,
        pension_cost,
        total_cost: wage_cost + ni_cost + pension_cost,
    }
}
