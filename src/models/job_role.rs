//! Job role model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A job role definition (e.g. "Server", "Sous Chef", "Kitchen Porter").
///
/// The `is_kitchen` flag drives role classification: roles are either
/// kitchen or front-of-house, and staff whose titles have no exact match
/// are allocated by this classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRole {
    /// Unique identifier for the role.
    pub id: String,
    /// Role title, matched (case-insensitively) against staff job titles.
    pub title: String,
    /// True for kitchen roles, false for front-of-house roles.
    pub is_kitchen: bool,
    /// Default hourly wage rate for staff in this role with no rate of their own.
    #[serde(default)]
    pub default_wage_rate: Option<Decimal>,
}
