//! Core data models for the Rota Generation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod job_role;
mod request;
mod schedule;
mod shift_rule;
mod staff;
mod threshold;

pub use job_role::JobRole;
pub use request::ScheduleRequest;
pub use schedule::{ScheduleSummary, Shift};
pub use shift_rule::{DayCode, ShiftRule};
pub use staff::{EmploymentType, StaffMember};
pub use threshold::RevenueThreshold;
