//! Greedy staff allocation against a weekly ledger.
//!
//! The allocator is split in two: [`select_staff`] is a pure selection over
//! a rank-ordered candidate pool, and [`AllocationLedger::commit`] records a
//! committed assignment. Mutation is confined to the ledger, one per run.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::StaffMember;

/// UK working-time heuristic: at most six worked days per week.
pub const MAX_DAYS_PER_WEEK: usize = 6;

/// Running allocation state for one staff member across the week.
#[derive(Debug, Clone, Default)]
pub struct WeeklyAllocation {
    /// Cumulative hours assigned so far.
    pub hours_worked: Decimal,
    /// Dates already worked. A date appears at most once.
    pub days_worked: Vec<NaiveDate>,
    /// Number of shifts assigned so far.
    pub shift_count: u32,
}

impl WeeklyAllocation {
    /// Returns true if this person already works on `date`.
    pub fn works_on(&self, date: NaiveDate) -> bool {
        self.days_worked.contains(&date)
    }
}

/// The per-run allocation ledger, one entry per ranked staff member.
///
/// Created at run start with zero values, mutated only through
/// [`AllocationLedger::commit`], and discarded at run end.
#[derive(Debug, Clone)]
pub struct AllocationLedger {
    entries: HashMap<String, WeeklyAllocation>,
}

impl AllocationLedger {
    /// Initializes a zeroed ledger for the given staff pool.
    pub fn new(staff: &[StaffMember]) -> Self {
        let entries = staff
            .iter()
            .map(|s| (s.id.clone(), WeeklyAllocation::default()))
            .collect();
        Self { entries }
    }

    /// Returns the allocation record for a staff member, if tracked.
    pub fn get(&self, staff_id: &str) -> Option<&WeeklyAllocation> {
        self.entries.get(staff_id)
    }

    /// Records a committed shift assignment.
    ///
    /// The date is appended only when not already present, preserving the
    /// one-entry-per-date invariant.
    pub fn commit(&mut self, staff_id: &str, date: NaiveDate, hours: Decimal) {
        if let Some(entry) = self.entries.get_mut(staff_id) {
            entry.hours_worked += hours;
            if !entry.days_worked.contains(&date) {
                entry.days_worked.push(date);
            }
            entry.shift_count += 1;
        }
    }
}

/// Selects the best available staff member for one shift slot.
///
/// The pool is already rank-ordered; the first candidate that
/// (a) has a ledger record, (b) has not worked this date, (c) would stay
/// within their weekly hour cap with this shift added, and (d) has worked
/// fewer than [`MAX_DAYS_PER_WEEK`] days, is returned.
///
/// This function has no side effects. The caller commits the allocation
/// separately once the shift is actually constructed.
pub fn select_staff<'a>(
    pool: &[&'a StaffMember],
    date: NaiveDate,
    hours: Decimal,
    ledger: &AllocationLedger,
) -> Option<&'a StaffMember> {
    pool.iter()
        .find(|staff| {
            let Some(entry) = ledger.get(&staff.id) else {
                return false;
            };
            !entry.works_on(date)
                && entry.hours_worked + hours <= staff.max_hours_per_week
                && entry.days_worked.len() < MAX_DAYS_PER_WEEK
        })
        .copied()
}
