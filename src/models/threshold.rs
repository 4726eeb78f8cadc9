//! Revenue threshold model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A revenue band mapping forecast revenue to per-category headcounts.
///
/// Bands are closed intervals `[revenue_min, revenue_max]`. When a day's
/// forecast falls outside every configured band, the scheduler clamps to the
/// lowest or highest band rather than leaving the day unstaffed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueThreshold {
    /// Lower bound of the revenue band (inclusive).
    pub revenue_min: Decimal,
    /// Upper bound of the revenue band (inclusive).
    pub revenue_max: Decimal,
    /// Minimum front-of-house headcount.
    pub foh_min_staff: u32,
    /// Maximum front-of-house headcount.
    pub foh_max_staff: u32,
    /// Minimum kitchen headcount.
    pub kitchen_min_staff: u32,
    /// Maximum kitchen headcount.
    pub kitchen_max_staff: u32,
    /// Minimum kitchen-porter headcount.
    pub kp_min_staff: u32,
    /// Maximum kitchen-porter headcount.
    pub kp_max_staff: u32,
}

impl RevenueThreshold {
    /// Returns true if `revenue` falls within this band (inclusive).
    pub fn contains(&self, revenue: Decimal) -> bool {
        revenue >= self.revenue_min && revenue <= self.revenue_max
    }
}
