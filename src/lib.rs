//! Rota Generation Engine
//!
//! This crate generates a week of dated, timed, costed work shifts from a
//! revenue forecast, a staff roster, job-role definitions, configured shift
//! rules and (as fallback) revenue-banded staffing thresholds.
//!
//! The scheduler is a deterministic, rule-first greedy heuristic: shift rules
//! take priority, revenue thresholds fill the gaps, and synthesized default
//! headcounts cover days with no configuration at all. Labour costs follow UK
//! conventions (wage, employer National Insurance, employer pension).

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod scheduling;
