//! Schedule orchestration.
//!
//! Walks the requested date range, dispatches each day to the shift-rule
//! engine or the threshold fallback, and assembles the final
//! [`ScheduleSummary`]. The run is single-threaded and synchronous: later
//! dates depend on allocation state from earlier ones, so dates must not be
//! processed in parallel within one run.

use chrono::{Datelike, Utc};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::SchedulerConfig;
use crate::error::EngineResult;
use crate::models::{
    DayCode, JobRole, RevenueThreshold, ScheduleRequest, ScheduleSummary, ShiftRule, StaffMember,
};

use super::allocator::AllocationLedger;
use super::rule_engine::fill_rule;
use super::threshold_fallback::fill_day_from_thresholds;

/// Generates a week's schedule.
///
/// The single entry point of the engine. Inputs are read-only; all
/// configuration arrives in the immutable [`SchedulerConfig`] rather than
/// through setters, so there is no temporal coupling between configuring
/// and running.
///
/// Per date, in order:
/// 1. Accumulate the day's forecast revenue (even when no staffing occurs).
/// 2. Skip the day entirely when forecast revenue is zero - no revenue
///    means no shift generation, even if rules exist.
/// 3. Dispatch matching non-archived shift rules in list order, or fall
///    back to revenue thresholds / synthesized headcounts when none match.
///
/// # Errors
///
/// Fails fast on malformed input: an inverted week range, negative revenue
/// figures, or unparseable rule times. Missing configuration and staffing
/// shortfalls are recovered locally and logged, never raised.
pub fn generate_schedule(
    request: &ScheduleRequest,
    staff: &[StaffMember],
    job_roles: &[JobRole],
    thresholds: &[RevenueThreshold],
    shift_rules: &[ShiftRule],
    config: &SchedulerConfig,
) -> EngineResult<ScheduleSummary> {
    request.validate()?;

    let ranked = rank_staff(staff, job_roles, config);
    let mut ledger = AllocationLedger::new(&ranked);

    let mut shifts = Vec::new();
    let mut total_revenue = Decimal::ZERO;

    for date in request.dates() {
        let day_code = DayCode::from(date.weekday());
        let revenue = request.revenue_for(date);
        total_revenue += revenue;

        if revenue == Decimal::ZERO {
            debug!(%date, "Zero forecast revenue; skipping day");
            continue;
        }

        let day_rules: Vec<&ShiftRule> = shift_rules
            .iter()
            .filter(|r| !r.archived && r.day == day_code)
            .collect();

        if day_rules.is_empty() {
            let day_shifts = fill_day_from_thresholds(
                date, revenue, thresholds, &ranked, job_roles, &mut ledger, config,
            );
            shifts.extend(day_shifts);
        } else {
            for rule in day_rules {
                let rule_shifts =
                    fill_rule(rule, date, &ranked, job_roles, &mut ledger, config)?;
                shifts.extend(rule_shifts);
            }
        }
    }

    let total_cost: Decimal = shifts.iter().map(|s| s.total_cost).sum();
    let cost_percentage = if total_revenue.is_zero() {
        Decimal::ZERO
    } else {
        total_cost / total_revenue * Decimal::new(100, 0)
    };

    if shifts.is_empty() {
        warn!(
            week_start = %request.week_start,
            week_end = %request.week_end,
            "Schedule generation produced no shifts"
        );
    }

    Ok(ScheduleSummary {
        schedule_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        shifts,
        total_cost,
        total_revenue,
        cost_percentage,
    })
}

/// Filters to available staff, defaults missing wage rates, and orders the
/// roster by allocation priority.
///
/// A missing wage rate is substituted once, before ranking: the job role's
/// default rate when one exists, otherwise the configured minimum wage.
/// Both substitutions are logged as diagnostics.
///
/// Ranking is a stable sort by priority score descending, so ties retain
/// input order and the run is deterministic.
fn rank_staff(
    staff: &[StaffMember],
    job_roles: &[JobRole],
    config: &SchedulerConfig,
) -> Vec<StaffMember> {
    let mut ranked: Vec<StaffMember> = staff
        .iter()
        .filter(|s| s.is_available)
        .cloned()
        .map(|mut s| {
            if s.wage_rate.is_none() {
                let role_default = job_roles
                    .iter()
                    .find(|r| r.title.eq_ignore_ascii_case(&s.job_title))
                    .and_then(|r| r.default_wage_rate);
                let substituted = role_default.unwrap_or(config.minimum_wage);
                info!(
                    staff_id = %s.id,
                    rate = %substituted,
                    from_role_default = role_default.is_some(),
                    "Substituted missing wage rate"
                );
                s.wage_rate = Some(substituted);
            }
            s
        })
        .collect();

    ranked.sort_by(|a, b| priority_score(b, config).cmp(&priority_score(a, config)));
    ranked
}

fn priority_score(staff: &StaffMember, config: &SchedulerConfig) -> i32 {
    let weights = &config.priority;
    let mut score = staff.hi_score * weights.hi_score_weight;
    if staff.is_salaried() {
        score += weights.salaried_bonus;
    }
    if staff.job_title.to_lowercase().contains("manager") {
        score += weights.manager_bonus;
    }
    score
}
