//! Ranked role catalog
//!
//! This module defines the nine-step seniority ladder used across the
//! platform, along with each role's default permission template. Rank
//! drives every hierarchy-validation and management-authorization
//! decision; the policy templates are only UI/onboarding presets, so
//! the two can evolve independently.

use std::fmt;

use serde::{Deserialize, Serialize};

use atrium_rbac::{AdminGrants, DataScope, ModuleGrants, Permissions};

/// A member's role on the agency seniority ladder.
///
/// Roles are totally ordered by rank; a *lower* rank number is *more*
/// senior. The enum discriminants are the ranks, so `Ord` follows
/// seniority: `Ceo < Vp < … < Intern`.
///
/// # Examples
///
/// ```
/// use atrium_org::AgencyRole;
///
/// assert_eq!(AgencyRole::Ceo.rank(), 1);
/// assert_eq!(AgencyRole::Intern.rank(), 9);
/// assert!(AgencyRole::Director.outranks(AgencyRole::Manager));
/// assert!(!AgencyRole::Manager.outranks(AgencyRole::Manager));
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AgencyRole {
    /// Chief executive; the single expected root of the org tree.
    Ceo = 1,

    /// Vice president.
    Vp = 2,

    /// Department director.
    Director = 3,

    /// Team manager.
    Manager = 4,

    /// Senior staff.
    Senior = 5,

    /// Mid-level staff.
    Mid = 6,

    /// Junior staff.
    Junior = 7,

    /// External contractor.
    Contractor = 8,

    /// Intern.
    Intern = 9,
}

impl AgencyRole {
    /// The role's rank. Lower is more senior; `Ceo` is 1, `Intern` is 9.
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// Check whether this role is strictly more senior than another.
    pub fn outranks(&self, other: AgencyRole) -> bool {
        self.rank() < other.rank()
    }

    /// Check whether this role sits on the executive tier (CEO, VP,
    /// Director).
    pub fn is_executive(&self) -> bool {
        self.rank() <= 3
    }

    /// Parse role from string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive)
    ///
    /// # Returns
    ///
    /// `Some(AgencyRole)` if valid, `None` otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use atrium_org::AgencyRole;
    ///
    /// assert_eq!(AgencyRole::parse("director"), Some(AgencyRole::Director));
    /// assert_eq!(AgencyRole::parse("CEO"), Some(AgencyRole::Ceo));
    /// assert_eq!(AgencyRole::parse("invalid"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "ceo" => Some(Self::Ceo),
            "vp" => Some(Self::Vp),
            "director" => Some(Self::Director),
            "manager" => Some(Self::Manager),
            "senior" => Some(Self::Senior),
            "mid" => Some(Self::Mid),
            "junior" => Some(Self::Junior),
            "contractor" => Some(Self::Contractor),
            "intern" => Some(Self::Intern),
            _ => None,
        }
    }

    /// Get string representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ceo => "ceo",
            Self::Vp => "vp",
            Self::Director => "director",
            Self::Manager => "manager",
            Self::Senior => "senior",
            Self::Mid => "mid",
            Self::Junior => "junior",
            Self::Contractor => "contractor",
            Self::Intern => "intern",
        }
    }

    /// Get a human-readable display name for the role.
    ///
    /// # Examples
    ///
    /// ```
    /// use atrium_org::AgencyRole;
    ///
    /// assert_eq!(AgencyRole::Vp.display_name(), "VP");
    /// assert_eq!(AgencyRole::Senior.display_name(), "Senior Staff");
    /// ```
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Ceo => "CEO",
            Self::Vp => "VP",
            Self::Director => "Director",
            Self::Manager => "Manager",
            Self::Senior => "Senior Staff",
            Self::Mid => "Mid-level Staff",
            Self::Junior => "Junior Staff",
            Self::Contractor => "Contractor",
            Self::Intern => "Intern",
        }
    }

    /// Get all roles, most senior first.
    pub fn all() -> Vec<Self> {
        vec![
            Self::Ceo,
            Self::Vp,
            Self::Director,
            Self::Manager,
            Self::Senior,
            Self::Mid,
            Self::Junior,
            Self::Contractor,
            Self::Intern,
        ]
    }

    /// Build the default permission template for this role.
    ///
    /// Every call constructs a fresh [`Permissions`] value; callers may
    /// mutate their copy freely without affecting the template or any
    /// other member. Applying a template is a full overwrite of a
    /// member's policy, never a merge with existing custom grants.
    ///
    /// # Examples
    ///
    /// ```
    /// use atrium_org::AgencyRole;
    /// use atrium_rbac::{AdminPermission, CrudAction, DataScope, ModuleKind};
    ///
    /// let policy = AgencyRole::Manager.default_policy();
    /// assert!(policy.allows(ModuleKind::Tasks, CrudAction::Delete));
    /// assert!(!policy.allows(ModuleKind::Settings, CrudAction::View));
    /// assert!(policy.admin_allows(AdminPermission::ViewReports));
    /// assert_eq!(policy.data_scope, DataScope::Team);
    /// ```
    pub fn default_policy(&self) -> Permissions {
        match self {
            Self::Ceo => Permissions {
                dashboard: ModuleGrants::full(),
                tasks: ModuleGrants::full(),
                clients: ModuleGrants::full(),
                calendar: ModuleGrants::full(),
                team: ModuleGrants::full(),
                analytics: ModuleGrants::full(),
                tags: ModuleGrants::full(),
                settings: ModuleGrants::full(),
                admin: AdminGrants::all(),
                data_scope: DataScope::All,
            },
            Self::Vp => Permissions {
                dashboard: ModuleGrants::full(),
                tasks: ModuleGrants::full(),
                clients: ModuleGrants::full(),
                calendar: ModuleGrants::full(),
                team: ModuleGrants::full(),
                analytics: ModuleGrants::full(),
                tags: ModuleGrants::full(),
                settings: ModuleGrants::contribute(),
                admin: AdminGrants {
                    manage_users: true,
                    manage_roles: true,
                    manage_permissions: false,
                    view_reports: true,
                    export_data: true,
                    manage_billing: false,
                },
                data_scope: DataScope::All,
            },
            Self::Director => Permissions {
                dashboard: ModuleGrants::view_only(),
                tasks: ModuleGrants::full(),
                clients: ModuleGrants::full(),
                calendar: ModuleGrants::full(),
                team: ModuleGrants::contribute(),
                analytics: ModuleGrants::view_only(),
                tags: ModuleGrants::full(),
                settings: ModuleGrants::view_only(),
                admin: AdminGrants {
                    manage_users: true,
                    manage_roles: false,
                    manage_permissions: false,
                    view_reports: true,
                    export_data: true,
                    manage_billing: false,
                },
                data_scope: DataScope::All,
            },
            Self::Manager => Permissions {
                dashboard: ModuleGrants::view_only(),
                tasks: ModuleGrants::full(),
                clients: ModuleGrants::contribute(),
                calendar: ModuleGrants::full(),
                team: ModuleGrants::view_only(),
                analytics: ModuleGrants::view_only(),
                tags: ModuleGrants::contribute(),
                settings: ModuleGrants::none(),
                admin: AdminGrants {
                    view_reports: true,
                    ..AdminGrants::none()
                },
                data_scope: DataScope::Team,
            },
            Self::Senior => Permissions {
                dashboard: ModuleGrants::view_only(),
                tasks: ModuleGrants::contribute(),
                clients: ModuleGrants {
                    view: true,
                    create: false,
                    edit: true,
                    delete: false,
                },
                calendar: ModuleGrants::contribute(),
                team: ModuleGrants::view_only(),
                analytics: ModuleGrants::none(),
                tags: ModuleGrants {
                    view: true,
                    create: true,
                    edit: false,
                    delete: false,
                },
                settings: ModuleGrants::none(),
                admin: AdminGrants::none(),
                data_scope: DataScope::Team,
            },
            Self::Mid => Permissions {
                dashboard: ModuleGrants::view_only(),
                tasks: ModuleGrants::contribute(),
                clients: ModuleGrants::view_only(),
                calendar: ModuleGrants::contribute(),
                team: ModuleGrants::view_only(),
                analytics: ModuleGrants::none(),
                tags: ModuleGrants::view_only(),
                settings: ModuleGrants::none(),
                admin: AdminGrants::none(),
                data_scope: DataScope::Own,
            },
            Self::Junior => Permissions {
                dashboard: ModuleGrants::view_only(),
                tasks: ModuleGrants::contribute(),
                clients: ModuleGrants::view_only(),
                calendar: ModuleGrants {
                    view: true,
                    create: true,
                    edit: false,
                    delete: false,
                },
                team: ModuleGrants::view_only(),
                analytics: ModuleGrants::none(),
                tags: ModuleGrants::view_only(),
                settings: ModuleGrants::none(),
                admin: AdminGrants::none(),
                data_scope: DataScope::Own,
            },
            Self::Contractor => Permissions {
                dashboard: ModuleGrants::view_only(),
                tasks: ModuleGrants {
                    view: true,
                    create: false,
                    edit: true,
                    delete: false,
                },
                clients: ModuleGrants::none(),
                calendar: ModuleGrants::view_only(),
                team: ModuleGrants::none(),
                analytics: ModuleGrants::none(),
                tags: ModuleGrants::view_only(),
                settings: ModuleGrants::none(),
                admin: AdminGrants::none(),
                data_scope: DataScope::Own,
            },
            Self::Intern => Permissions {
                dashboard: ModuleGrants::view_only(),
                tasks: ModuleGrants::view_only(),
                clients: ModuleGrants::none(),
                calendar: ModuleGrants::view_only(),
                team: ModuleGrants::view_only(),
                analytics: ModuleGrants::none(),
                tags: ModuleGrants::none(),
                settings: ModuleGrants::none(),
                admin: AdminGrants::none(),
                data_scope: DataScope::Own,
            },
        }
    }
}

impl Default for AgencyRole {
    fn default() -> Self {
        Self::Junior
    }
}

impl fmt::Display for AgencyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
