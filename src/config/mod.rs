//! Scheduler configuration for the Rota Generation Engine.
//!
//! Tunables (wage fallback, labour-cost constants, allocation priority
//! weights, part-shift bounds) are carried in an immutable
//! [`SchedulerConfig`] value passed into the entry point, rather than set
//! through mutable state before the run.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{PartShiftConfig, PriorityWeights, SchedulerConfig};
