//! Role eligibility classification.
//!
//! Staff are matched to required roles through explicit tiers: exact title
//! match, declared secondary roles, then kitchen/front-of-house category
//! agreement. Keyword heuristics on job titles are the bounded last resort
//! for staff with no entry in the job-role list.

use serde::{Deserialize, Serialize};

use crate::models::{JobRole, StaffMember};

/// Job-title keywords that indicate kitchen work.
const KITCHEN_KEYWORDS: [&str; 4] = ["chef", "cook", "kitchen", "porter"];

/// How a staff member qualified (or failed to qualify) for a role.
///
/// Tests target each tier independently rather than relying on incidental
/// string contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleClassification {
    /// Primary job title matches the role title exactly.
    ExactMatch,
    /// The role appears in the staff member's declared secondary roles.
    SecondaryMatch,
    /// Same kitchen/front-of-house category as the role.
    CategoryMatch,
    /// No eligibility could be established.
    Unclassified,
}

/// The three staff categories the threshold fallback staffs independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffCategory {
    /// Customer-facing staff: servers, bartenders, hosts.
    FrontOfHouse,
    /// Cooking staff: chefs, cooks.
    Kitchen,
    /// Kitchen porters: cleaning and kitchen support.
    KitchenPorter,
}

impl std::fmt::Display for StaffCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StaffCategory::FrontOfHouse => write!(f, "front of house"),
            StaffCategory::Kitchen => write!(f, "kitchen"),
            StaffCategory::KitchenPorter => write!(f, "kitchen porter"),
        }
    }
}

fn title_contains(title: &str, needle: &str) -> bool {
    title.to_lowercase().contains(needle)
}

/// Returns true if a job title reads as a kitchen title.
///
/// Keyword tier: `chef`, `cook`, `kitchen` or `porter` indicate kitchen;
/// anything else defaults to front of house.
pub fn title_is_kitchen(title: &str) -> bool {
    let lower = title.to_lowercase();
    KITCHEN_KEYWORDS.iter().any(|k| lower.contains(k))
}

/// Determines whether a staff member works in the kitchen.
///
/// Prefers the staff member's job-role record (matched by title against the
/// job-role list); falls back to the keyword heuristic when no record
/// matches.
pub fn staff_is_kitchen(staff: &StaffMember, job_roles: &[JobRole]) -> bool {
    match lookup_role(&staff.job_title, job_roles) {
        Some(role) => role.is_kitchen,
        None => title_is_kitchen(&staff.job_title),
    }
}

fn lookup_role<'a>(title: &str, job_roles: &'a [JobRole]) -> Option<&'a JobRole> {
    job_roles
        .iter()
        .find(|r| r.title.eq_ignore_ascii_case(title))
}

/// Classifies a staff member's eligibility for a required role.
///
/// Tiers, in order:
/// 1. [`RoleClassification::ExactMatch`] - primary title equals the role
///    title (case-insensitive).
/// 2. [`RoleClassification::SecondaryMatch`] - the role title appears in
///    the staff member's declared secondary roles.
/// 3. [`RoleClassification::CategoryMatch`] - the staff member's own role
///    shares the role's kitchen/front-of-house category.
/// 4. [`RoleClassification::Unclassified`] - none of the above.
pub fn classify_for_role(
    staff: &StaffMember,
    role_title: &str,
    role_is_kitchen: bool,
    job_roles: &[JobRole],
) -> RoleClassification {
    if staff.job_title.eq_ignore_ascii_case(role_title) {
        return RoleClassification::ExactMatch;
    }
    if staff
        .secondary_roles
        .iter()
        .any(|r| r.eq_ignore_ascii_case(role_title))
    {
        return RoleClassification::SecondaryMatch;
    }
    if staff_is_kitchen(staff, job_roles) == role_is_kitchen {
        return RoleClassification::CategoryMatch;
    }
    RoleClassification::Unclassified
}

/// Tests whether a staff member fits one of the fallback staff categories.
///
/// - Front of house: the job-role record is explicitly non-kitchen, or the
///   title carries no kitchen keyword.
/// - Kitchen: a kitchen role record (or a `chef`/`cook`/`kitchen` title)
///   whose title does not contain `porter`.
/// - Kitchen porter: a kitchen role record or title containing `porter`.
pub fn matches_category(
    staff: &StaffMember,
    category: StaffCategory,
    job_roles: &[JobRole],
) -> bool {
    let role = lookup_role(&staff.job_title, job_roles);
    let is_porter = title_contains(&staff.job_title, "porter");

    match category {
        StaffCategory::FrontOfHouse => match role {
            Some(role) => !role.is_kitchen,
            None => !title_is_kitchen(&staff.job_title),
        },
        StaffCategory::Kitchen => {
            if is_porter {
                return false;
            }
            match role {
                Some(role) => role.is_kitchen,
                None => title_is_kitchen(&staff.job_title),
            }
        }
        StaffCategory::KitchenPorter => is_porter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmploymentType;
    use rust_decimal::Decimal;

    fn staff(title: &str, secondary: Vec<&str>) -> StaffMember {
        StaffMember {
            id: format!("staff_{}", title.to_lowercase().replace(' ', "_")),
            first_name: "Test".to_string(),
            last_name: "Person".to_string(),
            job_title: title.to_string(),
            secondary_roles: secondary.into_iter().map(String::from).collect(),
            wage_rate: Some(Decimal::new(1200, 2)),
            employment_type: EmploymentType::Hourly,
            max_hours_per_week: Decimal::new(40, 0),
            is_available: true,
            hi_score: 5,
        }
    }

    fn roles() -> Vec<JobRole> {
        vec![
            JobRole {
                id: "role_server".to_string(),
                title: "Server".to_string(),
                is_kitchen: false,
                default_wage_rate: None,
            },
            JobRole {
                id: "role_chef".to_string(),
                title: "Sous Chef".to_string(),
                is_kitchen: true,
                default_wage_rate: None,
            },
            JobRole {
                id: "role_kp".to_string(),
                title: "Kitchen Porter".to_string(),
                is_kitchen: true,
                default_wage_rate: None,
            },
        ]
    }

    #[test]
    fn test_title_keyword_heuristic() {
        assert!(title_is_kitchen("Head Chef"));
        assert!(title_is_kitchen("Line Cook"));
        assert!(title_is_kitchen("Kitchen Assistant"));
        assert!(title_is_kitchen("Porter"));
        assert!(!title_is_kitchen("Server"));
        assert!(!title_is_kitchen("Bartender"));
        assert!(!title_is_kitchen("General Manager"));
    }

    #[test]
    fn test_exact_match_tier() {
        let s = staff("Server", vec![]);
        assert_eq!(
            classify_for_role(&s, "Server", false, &roles()),
            RoleClassification::ExactMatch
        );
        // Case-insensitive
        assert_eq!(
            classify_for_role(&s, "SERVER", false, &roles()),
            RoleClassification::ExactMatch
        );
    }

    #[test]
    fn test_secondary_match_tier() {
        let s = staff("Bartender", vec!["Server"]);
        assert_eq!(
            classify_for_role(&s, "Server", false, &roles()),
            RoleClassification::SecondaryMatch
        );
    }

    #[test]
    fn test_category_match_tier_via_role_record() {
        // Sous Chef is a kitchen role per the role list, so they can cover
        // another kitchen role by category.
        let s = staff("Sous Chef", vec![]);
        assert_eq!(
            classify_for_role(&s, "Grill Chef", true, &roles()),
            RoleClassification::CategoryMatch
        );
    }

    #[test]
    fn test_category_match_tier_via_keyword() {
        // "Pastry Cook" has no role record; keyword heuristic marks it kitchen.
        let s = staff("Pastry Cook", vec![]);
        assert_eq!(
            classify_for_role(&s, "Grill Chef", true, &roles()),
            RoleClassification::CategoryMatch
        );
    }

    #[test]
    fn test_unclassified_tier() {
        let s = staff("Server", vec![]);
        assert_eq!(
            classify_for_role(&s, "Grill Chef", true, &roles()),
            RoleClassification::Unclassified
        );
    }

    #[test]
    fn test_foh_category() {
        assert!(matches_category(&staff("Server", vec![]), StaffCategory::FrontOfHouse, &roles()));
        assert!(matches_category(
            &staff("Bartender", vec![]),
            StaffCategory::FrontOfHouse,
            &roles()
        ));
        assert!(!matches_category(
            &staff("Sous Chef", vec![]),
            StaffCategory::FrontOfHouse,
            &roles()
        ));
        assert!(!matches_category(
            &staff("Kitchen Porter", vec![]),
            StaffCategory::FrontOfHouse,
            &roles()
        ));
    }

    #[test]
    fn test_kitchen_category_excludes_porters() {
        assert!(matches_category(&staff("Sous Chef", vec![]), StaffCategory::Kitchen, &roles()));
        assert!(matches_category(&staff("Line Cook", vec![]), StaffCategory::Kitchen, &roles()));
        assert!(!matches_category(
            &staff("Kitchen Porter", vec![]),
            StaffCategory::Kitchen,
            &roles()
        ));
        assert!(!matches_category(&staff("Server", vec![]), StaffCategory::Kitchen, &roles()));
    }

    #[test]
    fn test_kp_category_requires_porter() {
        assert!(matches_category(
            &staff("Kitchen Porter", vec![]),
            StaffCategory::KitchenPorter,
            &roles()
        ));
        // Title-only porter with no role record still qualifies
        assert!(matches_category(
            &staff("Night Porter", vec![]),
            StaffCategory::KitchenPorter,
            &roles()
        ));
        assert!(!matches_category(
            &staff("Sous Chef", vec![]),
            StaffCategory::KitchenPorter,
            &roles()
        ));
    }

    #[test]
    fn test_role_record_overrides_keyword_for_foh() {
        // A role record explicitly non-kitchen wins even with an odd title.
        let mut role_list = roles();
        role_list.push(JobRole {
            id: "role_kdm".to_string(),
            title: "Kitchen Display Manager".to_string(),
            is_kitchen: false,
            default_wage_rate: None,
        });
        let s = staff("Kitchen Display Manager", vec![]);
        assert!(matches_category(&s, StaffCategory::FrontOfHouse, &role_list));
    }

    #[test]
    fn test_staff_is_kitchen_prefers_role_record() {
        assert!(staff_is_kitchen(&staff("Sous Chef", vec![]), &roles()));
        assert!(!staff_is_kitchen(&staff("Server", vec![]), &roles()));
        // No record: keyword fallback
        assert!(staff_is_kitchen(&staff("Commis Cook", vec![]), &roles()));
    }
}
