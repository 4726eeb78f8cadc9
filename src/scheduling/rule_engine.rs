//! Shift-rule staffing engine.
//!
//! Applies one configured [`ShiftRule`] to one date: resolves the target
//! role, builds a tiered eligibility pool, and fills the rule's `min_staff`
//! slots best-effort through the allocator. Fewer staff than desired is an
//! accepted shortfall, logged and not raised.

use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};

use crate::config::SchedulerConfig;
use crate::error::EngineResult;
use crate::models::{DayCode, JobRole, ShiftRule, StaffMember};

use super::allocator::{AllocationLedger, select_staff};
use super::cost::calculate_shift_cost;
use super::role_classifier::{RoleClassification, classify_for_role};
use super::shift_times::{parse_time, shift_hours};

/// Fixed unpaid break applied to every rule-derived shift, in minutes.
pub const RULE_BREAK_MINUTES: u32 = 30;

/// Fills one shift rule for one date.
///
/// The eligible pool is built in tiers: staff whose primary title matches
/// the rule's role or who declare it as a secondary role; when that pool is
/// empty, any staff sharing the role's kitchen/front-of-house category.
/// Exactly `min_staff` slots are filled, best-effort - `max_staff` is not
/// used as a stretch target.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidTime`] when the rule carries
/// an unparseable start or end time.
pub fn fill_rule(
    rule: &ShiftRule,
    date: NaiveDate,
    ranked_staff: &[StaffMember],
    job_roles: &[JobRole],
    ledger: &mut AllocationLedger,
    config: &SchedulerConfig,
) -> EngineResult<Vec<crate::models::Shift>> {
    let role = resolve_rule_role(rule, job_roles);

    let context = format!("shift rule '{}'", rule.id);
    let start = parse_time(&rule.start_time, &context)?;
    let end = parse_time(&rule.end_time, &context)?;
    let hours = shift_hours(start, end, RULE_BREAK_MINUTES);

    let pool = eligible_pool(ranked_staff, &role, job_roles);
    if pool.is_empty() {
        warn!(
            rule_id = %rule.id,
            role = %role.title,
            %date,
            "No eligible staff for shift rule"
        );
        return Ok(Vec::new());
    }

    let day_name = DayCode::from(date.weekday()).day_name();
    let mut shifts = Vec::new();

    for slot in 0..rule.min_staff {
        let candidates: Vec<&StaffMember> = pool.iter().map(|(s, _)| *s).collect();
        let Some(staff) = select_staff(&candidates, date, hours, ledger) else {
            warn!(
                rule_id = %rule.id,
                %date,
                filled = slot,
                wanted = rule.min_staff,
                "Staffing shortfall: stopping rule fill early"
            );
            break;
        };
        let classification = pool
            .iter()
            .find(|(s, _)| s.id == staff.id)
            .map(|(_, c)| *c)
            .unwrap_or(RoleClassification::Unclassified);

        let wage_rate = staff.wage_rate.unwrap_or(config.minimum_wage);
        let cost = calculate_shift_cost(wage_rate, staff.employment_type, hours, config);

        debug!(
            rule_id = %rule.id,
            staff_id = %staff.id,
            %date,
            %hours,
            "Assigned staff to rule shift"
        );

        shifts.push(crate::models::Shift {
            staff_id: staff.id.clone(),
            date,
            day_name: day_name.to_string(),
            start_time: start,
            end_time: end,
            break_minutes: RULE_BREAK_MINUTES,
            job_role_id: role.id.clone(),
            is_secondary_role: classification != RoleClassification::ExactMatch,
            hi_score: staff.hi_score,
            wage_cost: cost.wage_cost,
            ni_cost: cost.ni_cost,
            pension_cost: cost.pension_cost,
            total_cost: cost.total_cost,
            rule_id: Some(rule.id.clone()),
            rule_name: rule.name.clone(),
        });

        ledger.commit(&staff.id, date, hours);
    }

    Ok(shifts)
}

/// Resolves the job role a rule staffs: the embedded projection first, then
/// a lookup by id, then a placeholder synthesized from the rule itself.
fn resolve_rule_role(rule: &ShiftRule, job_roles: &[JobRole]) -> JobRole {
    if let Some(role) = &rule.job_role {
        return role.clone();
    }
    if let Some(role) = job_roles.iter().find(|r| r.id == rule.job_role_id) {
        return role.clone();
    }
    let title = rule.name.clone().unwrap_or_else(|| "Team Member".to_string());
    warn!(
        rule_id = %rule.id,
        job_role_id = %rule.job_role_id,
        "Job role for shift rule not found; synthesizing placeholder"
    );
    JobRole {
        id: rule.job_role_id.clone(),
        title,
        is_kitchen: false,
        default_wage_rate: None,
    }
}

/// Builds the tiered eligibility pool for a role, preserving rank order.
fn eligible_pool<'a>(
    ranked_staff: &'a [StaffMember],
    role: &JobRole,
    job_roles: &[JobRole],
) -> Vec<(&'a StaffMember, RoleClassification)> {
    let classified: Vec<(&StaffMember, RoleClassification)> = ranked_staff
        .iter()
        .map(|s| (s, classify_for_role(s, &role.title, role.is_kitchen, job_roles)))
        .collect();

    let direct: Vec<(&StaffMember, RoleClassification)> = classified
        .iter()
        .filter(|(_, c)| {
            matches!(
                c,
                RoleClassification::ExactMatch | RoleClassification::SecondaryMatch
            )
        })
        .copied()
        .collect();
    if !direct.is_empty() {
        return direct;
    }

    debug!(role = %role.title, "No direct title matches; broadening to category tier");
    classified
        .into_iter()
        .filter(|(_, c)| *c == RoleClassification::CategoryMatch)
        .collect()
}
