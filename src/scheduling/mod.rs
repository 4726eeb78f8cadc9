//! Scheduling logic for the Rota Generation Engine.
//!
//! This module contains the complete generation pipeline: labour cost
//! calculation, segment time resolution, role classification, greedy staff
//! allocation against a weekly ledger, the shift-rule engine, the
//! revenue-threshold fallback engine, and the orchestrator that walks the
//! requested date range and assembles the final schedule.

mod allocator;
mod cost;
mod orchestrator;
mod role_classifier;
mod rule_engine;
mod shift_times;
mod threshold_fallback;

pub use allocator::{AllocationLedger, MAX_DAYS_PER_WEEK, WeeklyAllocation, select_staff};
pub use cost::{ShiftCost, calculate_shift_cost};
pub use orchestrator::generate_schedule;
pub use role_classifier::{
    RoleClassification, StaffCategory, classify_for_role, matches_category, staff_is_kitchen,
    title_is_kitchen,
};
pub use rule_engine::{RULE_BREAK_MINUTES, fill_rule};
pub use shift_times::{Segment, SegmentTimes, parse_time, segment_times, shift_hours};
pub use threshold_fallback::{fill_day_from_thresholds, select_band, synthesized_headcounts};
