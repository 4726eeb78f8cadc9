//! Configuration types for the scheduler.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from a YAML configuration file. Every field has a default;
//! an absent configuration file behaves identically to the defaults.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Weights applied when ranking staff for allocation priority.
///
/// With the default weights, ranking reduces to plain `hi_score`
/// descending. These are opaque tunables: the engine honours them without
/// interpreting them beyond range.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PriorityWeights {
    /// Multiplier applied to each staff member's ranking score.
    pub hi_score_weight: i32,
    /// Flat bonus added to salaried staff.
    pub salaried_bonus: i32,
    /// Flat bonus added to staff whose title contains "manager".
    pub manager_bonus: i32,
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            hi_score_weight: 1,
            salaried_bonus: 0,
            manager_bonus: 0,
        }
    }
}

/// Bounds for partial shifts generated by the threshold fallback.
///
/// When enabled, fallback segments longer than `max_hours` are trimmed and
/// segments shorter than `min_hours` are skipped. Rule-derived shifts keep
/// their configured times regardless.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PartShiftConfig {
    /// Whether partial-shift bounds are applied.
    pub enabled: bool,
    /// Minimum fallback segment length in hours.
    pub min_hours: Decimal,
    /// Maximum fallback segment length in hours.
    pub max_hours: Decimal,
}

impl Default for PartShiftConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            min_hours: Decimal::new(3, 0),
            max_hours: Decimal::new(8, 0),
        }
    }
}

/// Immutable configuration for one schedule generation run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Hourly wage fallback for staff with no rate and no role default.
    pub minimum_wage: Decimal,
    /// Weekly earnings threshold above which employer NI applies.
    pub ni_weekly_threshold: Decimal,
    /// Employer National Insurance rate.
    pub ni_rate: Decimal,
    /// Employer pension contribution rate.
    pub pension_rate: Decimal,
    /// Hours in a standard working week, used to derive the hourly NI threshold.
    pub standard_week_hours: Decimal,
    /// Allocation priority weights.
    pub priority: PriorityWeights,
    /// Partial-shift bounds for fallback segments.
    pub part_shifts: PartShiftConfig,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            // UK National Living Wage, April 2024.
            minimum_wage: Decimal::new(1144, 2),
            ni_weekly_threshold: Decimal::new(175, 0),
            ni_rate: Decimal::new(138, 3),
            pension_rate: Decimal::new(3, 2),
            standard_week_hours: Decimal::new(40, 0),
            priority: PriorityWeights::default(),
            part_shifts: PartShiftConfig::default(),
        }
    }
}

impl SchedulerConfig {
    /// The hourly wage threshold above which employer NI is due.
    pub fn ni_hourly_threshold(&self) -> Decimal {
        self.ni_weekly_threshold / self.standard_week_hours
    }
}
