//! Revenue-threshold fallback staffing engine.
//!
//! When a day has no matching shift rules, staffing targets come from a
//! revenue-banded threshold; when no thresholds are configured at all,
//! default headcounts are synthesized from the revenue figure itself. Both
//! paths staff front-of-house, kitchen and kitchen-porter slots for day and
//! evening segments through the same allocator as the rule engine.

use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::{debug, warn};

use crate::config::SchedulerConfig;
use crate::models::{DayCode, JobRole, RevenueThreshold, Shift, StaffMember};

use super::allocator::{AllocationLedger, select_staff};
use super::cost::calculate_shift_cost;
use super::role_classifier::{StaffCategory, matches_category, staff_is_kitchen};
use super::shift_times::{Segment, SegmentTimes, segment_times, shift_hours};

/// Per-category headcounts for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Headcounts {
    /// Front-of-house slots to fill.
    pub foh: u32,
    /// Kitchen slots to fill.
    pub kitchen: u32,
    /// Kitchen-porter slots to fill.
    pub kp: u32,
}

/// Selects the revenue band for a day's forecast.
///
/// Bands are ordered by `revenue_min` ascending and the first band
/// containing the revenue wins. Revenue outside every band clamps to the
/// nearest band below it: below the lowest band that is the lowest band,
/// in a gap between non-adjacent bands it is the band under the gap, and
/// above the highest band it is the highest. Returns `None` only when no
/// thresholds are configured at all.
pub fn select_band(
    thresholds: &[RevenueThreshold],
    revenue: Decimal,
) -> Option<&RevenueThreshold> {
    let mut bands: Vec<&RevenueThreshold> = thresholds.iter().collect();
    if bands.is_empty() {
        return None;
    }
    bands.sort_by(|a, b| a.revenue_min.cmp(&b.revenue_min));

    if let Some(band) = bands.iter().find(|b| b.contains(revenue)) {
        return Some(band);
    }

    let lowest = bands[0];
    if revenue < lowest.revenue_min {
        Some(lowest)
    } else {
        bands
            .iter()
            .rev()
            .find(|b| b.revenue_min <= revenue)
            .copied()
    }
}

/// Synthesizes default minimum headcounts purely from forecast revenue.
///
/// Used when no revenue thresholds are configured:
/// `FOH = clamp(floor(revenue/1500), 1, 4)`,
/// `Kitchen = clamp(floor(revenue/2000), 1, 3)`,
/// `KP = 1` only when revenue exceeds 3000.
pub fn synthesized_headcounts(revenue: Decimal) -> Headcounts {
    // A quotient too large for u32 saturates, so the clamp below lands on
    // the maximum headcount rather than the minimum.
    let floor_div = |divisor: i64| -> u32 {
        (revenue / Decimal::new(divisor, 0))
            .floor()
            .to_u32()
            .unwrap_or(u32::MAX)
    };
    Headcounts {
        foh: floor_div(1500).clamp(1, 4),
        kitchen: floor_div(2000).clamp(1, 3),
        kp: if revenue > Decimal::new(3000, 0) { 1 } else { 0 },
    }
}

/// Staffs one ruleless day from thresholds (or synthesized defaults).
///
/// Each segment/category pairing is an independent fill pass, so a fully
/// configured day runs up to six passes: FOH, kitchen and KP for both the
/// day and evening segments. When a band exists, the evening segment reuses
/// the band's minimums; in the synthesized case the evening is staffed only
/// when revenue exceeds 2000.
pub fn fill_day_from_thresholds(
    date: NaiveDate,
    revenue: Decimal,
    thresholds: &[RevenueThreshold],
    ranked_staff: &[StaffMember],
    job_roles: &[JobRole],
    ledger: &mut AllocationLedger,
    config: &SchedulerConfig,
) -> Vec<Shift> {
    let day_code = DayCode::from(date.weekday());
    let weekend = day_code.is_weekend();

    let (counts, evening) = match select_band(thresholds, revenue) {
        Some(band) => {
            debug!(
                %date,
                %revenue,
                band_min = %band.revenue_min,
                band_max = %band.revenue_max,
                "Selected revenue threshold band"
            );
            (
                Headcounts {
                    foh: band.foh_min_staff,
                    kitchen: band.kitchen_min_staff,
                    kp: band.kp_min_staff,
                },
                true,
            )
        }
        None => {
            warn!(%date, %revenue, "No revenue thresholds configured; synthesizing headcounts");
            (
                synthesized_headcounts(revenue),
                revenue > Decimal::new(2000, 0),
            )
        }
    };

    let mut segments = vec![Segment::Day];
    if evening {
        segments.push(Segment::Evening);
    }

    let mut shifts = Vec::new();
    for segment in segments {
        let Some(times) = bounded_segment(segment, weekend, config) else {
            debug!(%date, %segment, "Segment shorter than part-shift minimum; skipped");
            continue;
        };
        let hours = shift_hours(times.start, times.end, times.break_minutes);

        for (category, count) in [
            (StaffCategory::FrontOfHouse, counts.foh),
            (StaffCategory::Kitchen, counts.kitchen),
            (StaffCategory::KitchenPorter, counts.kp),
        ] {
            if count == 0 {
                continue;
            }
            fill_category(
                category,
                count,
                date,
                day_code,
                times,
                hours,
                ranked_staff,
                job_roles,
                ledger,
                config,
                &mut shifts,
            );
        }
    }

    shifts
}

/// Applies part-shift bounds to a segment, trimming or rejecting it.
fn bounded_segment(
    segment: Segment,
    weekend: bool,
    config: &SchedulerConfig,
) -> Option<SegmentTimes> {
    let mut times = segment_times(segment, weekend);
    if !config.part_shifts.enabled {
        return Some(times);
    }

    let hours = shift_hours(times.start, times.end, times.break_minutes);
    if hours < config.part_shifts.min_hours {
        return None;
    }
    if hours > config.part_shifts.max_hours {
        let worked_minutes = (config.part_shifts.max_hours * Decimal::new(60, 0))
            .to_i64()
            .unwrap_or(0);
        times.end = times.start + Duration::minutes(worked_minutes + i64::from(times.break_minutes));
    }
    Some(times)
}

#[allow(clippy::too_many_arguments)]
fn fill_category(
    category: StaffCategory,
    count: u32,
    date: NaiveDate,
    day_code: DayCode,
    times: SegmentTimes,
    hours: Decimal,
    ranked_staff: &[StaffMember],
    job_roles: &[JobRole],
    ledger: &mut AllocationLedger,
    config: &SchedulerConfig,
    shifts: &mut Vec<Shift>,
) {
    let pool = candidate_pool(category, ranked_staff, job_roles);
    if pool.is_empty() {
        warn!(%date, %category, "No candidates for category even after broadening");
        return;
    }

    let (role, synthesized) = resolve_category_role(category, job_roles);

    for slot in 0..count {
        let Some(staff) = select_staff(&pool, date, hours, ledger) else {
            warn!(
                %date,
                %category,
                filled = slot,
                wanted = count,
                "Staffing shortfall in threshold fill"
            );
            break;
        };

        let wage_rate = staff.wage_rate.unwrap_or(config.minimum_wage);
        let cost = calculate_shift_cost(wage_rate, staff.employment_type, hours, config);
        let is_secondary_role =
            synthesized || !staff.job_title.eq_ignore_ascii_case(&role.title);

        shifts.push(Shift {
            staff_id: staff.id.clone(),
            date,
            day_name: day_code.day_name().to_string(),
            start_time: times.start,
            end_time: times.end,
            break_minutes: times.break_minutes,
            job_role_id: role.id.clone(),
            is_secondary_role,
            hi_score: staff.hi_score,
            wage_cost: cost.wage_cost,
            ni_cost: cost.ni_cost,
            pension_cost: cost.pension_cost,
            total_cost: cost.total_cost,
            rule_id: None,
            rule_name: None,
        });

        ledger.commit(&staff.id, date, hours);
    }
}

/// Builds the candidate pool for a category, broadening progressively.
///
/// Tiers: the category's own filter; then kitchen/non-kitchen alignment
/// only; then, as last resort, the entire ranked pool. A role-matching
/// shortfall never silently produces zero assignments while staff exist.
fn candidate_pool<'a>(
    category: StaffCategory,
    ranked_staff: &'a [StaffMember],
    job_roles: &[JobRole],
) -> Vec<&'a StaffMember> {
    let primary: Vec<&StaffMember> = ranked_staff
        .iter()
        .filter(|s| matches_category(s, category, job_roles))
        .collect();
    if !primary.is_empty() {
        return primary;
    }

    let wants_kitchen = category != StaffCategory::FrontOfHouse;
    let by_side: Vec<&StaffMember> = ranked_staff
        .iter()
        .filter(|s| staff_is_kitchen(s, job_roles) == wants_kitchen)
        .collect();
    if !by_side.is_empty() {
        warn!(%category, "Broadened candidate pool to kitchen/front-of-house alignment");
        return by_side;
    }

    warn!(%category, "Broadened candidate pool to entire roster");
    ranked_staff.iter().collect()
}

/// Resolves the job role to attach to shifts generated for a category.
///
/// Keyword lookup against the job-role list (`server`/`team` for FOH,
/// `chef` for kitchen, `porter` for KP); when nothing resolves, a
/// placeholder role is synthesized (not persisted) and every shift carrying
/// it is marked as a secondary-role assignment.
fn resolve_category_role(category: StaffCategory, job_roles: &[JobRole]) -> (JobRole, bool) {
    let (keywords, placeholder_id, placeholder_title, is_kitchen): (&[&str], _, _, _) =
        match category {
            StaffCategory::FrontOfHouse => {
                (&["server", "team"], "role_foh", "Front of House", false)
            }
            StaffCategory::Kitchen => (&["chef"], "role_kitchen", "Chef", true),
            StaffCategory::KitchenPorter => (&["porter"], "role_kp", "Kitchen Porter", true),
        };

    let found = job_roles.iter().find(|r| {
        let title = r.title.to_lowercase();
        keywords.iter().any(|k| title.contains(k))
    });

    match found {
        Some(role) => (role.clone(), false),
        None => (
            JobRole {
                id: placeholder_id.to_string(),
                title: placeholder_title.to_string(),
                is_kitchen,
                default_wage_rate: None,
            },
            true,
        ),
    }
}
